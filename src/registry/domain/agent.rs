//! Registered agent record.

use super::{AgentId, AgentMetadata, AgentStatus, AgentType, Capability};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A logical agent known to the registry.
///
/// Records are created only through registration. Status is the only field
/// that changes in place; capabilities change only through the registry so
/// the capability index stays consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: String,
    agent_type: AgentType,
    capabilities: Vec<Capability>,
    status: AgentStatus,
    metadata: AgentMetadata,
    registered_at: DateTime<Utc>,
}

/// Parameter object for constructing a new [`Agent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentParams {
    /// Caller-assigned identifier.
    pub id: AgentId,
    /// Display name.
    pub name: String,
    /// Hardware class.
    pub agent_type: AgentType,
    /// Declared capabilities, in caller order.
    pub capabilities: Vec<Capability>,
    /// Open-ended metadata.
    pub metadata: AgentMetadata,
}

impl Agent {
    /// Creates an agent with [`AgentStatus::Idle`] stamped at the clock's
    /// current time.
    #[must_use]
    pub fn new(params: AgentParams, clock: &impl Clock) -> Self {
        let AgentParams {
            id,
            name,
            agent_type,
            capabilities,
            metadata,
        } = params;
        Self {
            id,
            name,
            agent_type,
            capabilities,
            status: AgentStatus::Idle,
            metadata,
            registered_at: clock.utc(),
        }
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hardware class.
    #[must_use]
    pub const fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    /// Returns the declared capabilities in registration order.
    #[must_use]
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Returns whether the agent declares `capability`.
    #[must_use]
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c.as_str() == capability)
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns whether the agent can currently take work.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Returns the metadata map.
    #[must_use]
    pub const fn metadata(&self) -> &AgentMetadata {
        &self.metadata
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub(crate) const fn set_status(&mut self, status: AgentStatus) {
        self.status = status;
    }

    pub(crate) fn push_capability(&mut self, capability: Capability) {
        self.capabilities.push(capability);
    }

    /// Drops every occurrence of `capability`, returning whether any matched.
    pub(crate) fn drop_capability(&mut self, capability: &str) -> bool {
        let before = self.capabilities.len();
        self.capabilities.retain(|c| c.as_str() != capability);
        self.capabilities.len() != before
    }
}
