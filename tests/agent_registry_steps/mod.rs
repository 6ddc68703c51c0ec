//! Step definitions for agent registry BDD scenarios.

pub mod then;
pub mod when;
