//! Combined discovery filters.

use super::{Agent, AgentStatus, AgentType, Capability, MetadataValue};
use std::collections::BTreeMap;

/// Filter set for [`discover`](crate::registry::services::AgentRegistry::discover).
///
/// Every filter left unset matches all agents. Filters combine with AND.
///
/// # Examples
///
/// ```
/// use agent_registry::registry::domain::{AgentType, DiscoveryQuery};
///
/// let query = DiscoveryQuery::new()
///     .with_type(AgentType::Nvidia)
///     .with_capability("vision")
///     .available_only()
///     .with_limit(2);
/// assert_eq!(query.limit(), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryQuery {
    agent_type: Option<AgentType>,
    capability: Option<Capability>,
    status: Option<AgentStatus>,
    available_only: bool,
    metadata: BTreeMap<String, MetadataValue>,
    limit: Option<usize>,
}

impl DiscoveryQuery {
    /// Creates a query matching every agent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            agent_type: None,
            capability: None,
            status: None,
            available_only: false,
            metadata: BTreeMap::new(),
            limit: None,
        }
    }

    /// Restricts results to one agent type.
    #[must_use]
    pub const fn with_type(mut self, agent_type: AgentType) -> Self {
        self.agent_type = Some(agent_type);
        self
    }

    /// Restricts results to agents declaring `capability`.
    #[must_use]
    pub fn with_capability(mut self, capability: impl Into<Capability>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to idle or active agents.
    #[must_use]
    pub const fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    /// Restricts results to agents whose metadata holds exactly `value`
    /// under `key`.
    ///
    /// Repeated calls add further required entries; agents lacking the key
    /// never match.
    #[must_use]
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Caps the number of results.
    ///
    /// A limit of zero yields no results; leave the limit unset to return
    /// every match.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the capability filter, if set.
    #[must_use]
    pub const fn capability(&self) -> Option<&Capability> {
        self.capability.as_ref()
    }

    /// Returns the result cap, if set.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns whether `agent` passes every filter.
    #[must_use]
    pub fn matches(&self, agent: &Agent) -> bool {
        self.agent_type.is_none_or(|t| agent.agent_type() == t)
            && self.status.is_none_or(|s| agent.status() == s)
            && (!self.available_only || agent.is_available())
            && self
                .metadata
                .iter()
                .all(|(key, value)| agent.metadata().get(key) == Some(value))
            && self
                .capability
                .as_ref()
                .is_none_or(|c| agent.has_capability(c.as_str()))
    }
}
