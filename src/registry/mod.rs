//! Agent registration and discovery.
//!
//! Hosts register logical agents under caller-chosen ids and look them up by
//! capability, hardware type or availability. The module is split into:
//!
//! - Domain types in [`domain`]
//! - Registry configuration in [`config`]
//! - The registry itself in [`services`]

pub mod config;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
