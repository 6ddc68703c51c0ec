//! Agent registry: in-process directory of logical agents.
//!
//! Hosts register agents under caller-chosen identifiers together with a
//! display name, a hardware type, capability tags and free-form metadata,
//! then look them up by capability, by type or by availability.
//!
//! # Architecture
//!
//! The registry keeps two structures in step:
//!
//! - **Agent table**: records keyed by id, iterated in registration order
//! - **Capability index**: capability tag to the ids declaring it
//!
//! Every mutation updates both, so a capability lookup never returns an
//! agent that was removed or no longer declares the tag.
//!
//! # Modules
//!
//! - [`registry`]: Domain types, configuration and the registry service
//!
//! # Examples
//!
//! ```
//! use agent_registry::registry::{
//!     domain::{AgentStatus, AgentType},
//!     services::{AgentRegistry, RegisterAgentRequest},
//! };
//!
//! let mut registry = AgentRegistry::new();
//! registry.register(
//!     RegisterAgentRequest::new("gpu-1", "GPU worker", ["vision"]).with_type(AgentType::Nvidia),
//! );
//! registry.update_status("gpu-1", AgentStatus::Busy);
//!
//! assert!(registry.find_available().is_empty());
//! assert_eq!(registry.find_by_type(AgentType::Nvidia).len(), 1);
//! ```

pub mod registry;
