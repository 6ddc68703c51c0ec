//! Domain model for the agent registry.
//!
//! Covers agent records, their closed type and status vocabularies, the
//! capability index and the aggregate statistics report. Nothing here
//! performs I/O.

mod agent;
mod error;
mod ids;
mod index;
mod kind;
mod metadata;
mod protocol;
mod query;
mod statistics;
mod status;

pub use agent::{Agent, AgentParams};
pub use error::{
    MetadataConversionError, ParseAgentStatusError, ParseAgentTypeError, ParseProtocolError,
};
pub use ids::{AgentId, Capability};
pub use index::CapabilityIndex;
pub use kind::AgentType;
pub use metadata::{AgentMetadata, MetadataValue};
pub use protocol::Protocol;
pub use query::DiscoveryQuery;
pub use statistics::{RegistryStatistics, StatusCounts, TypeCounts};
pub use status::AgentStatus;
