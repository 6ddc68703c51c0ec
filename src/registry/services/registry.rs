//! In-process agent registry.
//!
//! Provides [`AgentRegistry`], which owns the agent table and the capability
//! index and keeps the two consistent across every mutation.

use crate::registry::{
    config::RegistryConfig,
    domain::{
        Agent, AgentId, AgentMetadata, AgentParams, AgentStatus, AgentType, Capability,
        CapabilityIndex, DiscoveryQuery, RegistryStatistics,
    },
};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, trace};

/// Request payload for registering an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAgentRequest {
    id: AgentId,
    name: String,
    agent_type: AgentType,
    capabilities: Vec<Capability>,
    metadata: AgentMetadata,
}

impl RegisterAgentRequest {
    /// Creates a request for a CPU agent with empty metadata.
    #[must_use]
    pub fn new<I>(id: impl Into<AgentId>, name: impl Into<String>, capabilities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Capability>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            agent_type: AgentType::default(),
            capabilities: capabilities.into_iter().map(Into::into).collect(),
            metadata: AgentMetadata::new(),
        }
    }

    /// Sets the hardware class.
    #[must_use]
    pub const fn with_type(mut self, agent_type: AgentType) -> Self {
        self.agent_type = agent_type;
        self
    }

    /// Sets the metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: AgentMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Directory of agents with secondary lookup by capability and type.
///
/// Iteration follows registration order. Replacing an agent by registering
/// its id again keeps its original position.
///
/// The registry is single-owner: every mutation takes `&mut self`. Hosts
/// sharing it across threads must guard the whole value with one lock, since
/// the agent table and the capability index change together.
///
/// # Examples
///
/// ```
/// use agent_registry::registry::services::{AgentRegistry, RegisterAgentRequest};
///
/// let mut registry = AgentRegistry::new();
/// registry.register(RegisterAgentRequest::new("a1", "Agent 1", ["nlp", "vision"]));
/// registry.register(RegisterAgentRequest::new("a2", "Agent 2", ["nlp"]));
///
/// let ids: Vec<&str> = registry
///     .find_by_capability("nlp")
///     .iter()
///     .map(|agent| agent.id().as_str())
///     .collect();
/// assert_eq!(ids, ["a1", "a2"]);
/// assert_eq!(registry.get_statistics().total_agents, 2);
/// ```
pub struct AgentRegistry<C = DefaultClock>
where
    C: Clock,
{
    agents: HashMap<AgentId, Agent>,
    order: Vec<AgentId>,
    index: CapabilityIndex,
    config: RegistryConfig,
    clock: C,
}

impl AgentRegistry<DefaultClock> {
    /// Creates an empty registry using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_clock(DefaultClock, config)
    }
}

impl Default for AgentRegistry<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> AgentRegistry<C>
where
    C: Clock,
{
    /// Creates an empty registry stamping registrations with `clock`.
    #[must_use]
    pub fn with_clock(clock: C, config: RegistryConfig) -> Self {
        Self {
            agents: HashMap::new(),
            order: Vec::new(),
            index: CapabilityIndex::new(),
            config,
            clock,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the capability index.
    #[must_use]
    pub const fn capability_index(&self) -> &CapabilityIndex {
        &self.index
    }

    /// Registers an agent, replacing any record with the same id.
    ///
    /// The new record starts [`AgentStatus::Idle`]. On replacement the old
    /// record's index entries for capabilities the new record no longer
    /// declares are cleared; shared capabilities keep their position.
    pub fn register(&mut self, request: RegisterAgentRequest) -> &Agent {
        let RegisterAgentRequest {
            id,
            name,
            agent_type,
            capabilities,
            metadata,
        } = request;
        let agent = Agent::new(
            AgentParams {
                id: id.clone(),
                name,
                agent_type,
                capabilities,
                metadata,
            },
            &self.clock,
        );
        let prune = self.config.prune_empty_capabilities;

        let stored = match self.agents.entry(id) {
            Entry::Occupied(mut slot) => {
                let previous = slot.insert(agent);
                let current = slot.into_mut();
                for capability in previous.capabilities() {
                    if !current.has_capability(capability.as_str()) {
                        self.index.remove(capability.as_str(), current.id(), prune);
                    }
                }
                debug!(agent_id = %current.id(), "replacing existing agent registration");
                current
            }
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(agent)
            }
        };

        for capability in stored.capabilities() {
            self.index.insert(capability, stored.id());
        }

        debug!(
            agent_id = %stored.id(),
            agent_type = %stored.agent_type(),
            capabilities = stored.capabilities().len(),
            "registered agent"
        );
        stored
    }

    /// Removes an agent and its capability index memberships.
    ///
    /// Returns `false` when no agent has the given id.
    pub fn unregister(&mut self, id: &str) -> bool {
        let Some(agent) = self.agents.remove(id) else {
            trace!(agent_id = id, "unregister skipped: unknown agent");
            return false;
        };
        self.order.retain(|existing| existing != agent.id());

        let prune = self.config.prune_empty_capabilities;
        for capability in agent.capabilities() {
            self.index.remove(capability.as_str(), agent.id(), prune);
        }

        debug!(agent_id = id, "unregistered agent");
        true
    }

    /// Returns agents declaring `capability`, in the order they joined it.
    #[must_use]
    pub fn find_by_capability(&self, capability: &str) -> Vec<&Agent> {
        self.capability_members(capability).collect()
    }

    /// Returns agents of `agent_type`, in registration order.
    #[must_use]
    pub fn find_by_type(&self, agent_type: AgentType) -> Vec<&Agent> {
        self.iter()
            .filter(|agent| agent.agent_type() == agent_type)
            .collect()
    }

    /// Returns idle or active agents, in registration order.
    #[must_use]
    pub fn find_available(&self) -> Vec<&Agent> {
        self.iter().filter(|agent| agent.is_available()).collect()
    }

    /// Returns agents passing every filter of `query`.
    ///
    /// With a capability filter, results follow that capability's join
    /// order; otherwise registration order.
    #[must_use]
    pub fn discover(&self, query: &DiscoveryQuery) -> Vec<&Agent> {
        query.capability().map_or_else(
            || select(self.iter(), query),
            |capability| select(self.capability_members(capability.as_str()), query),
        )
    }

    /// Sets the status of an agent.
    ///
    /// Returns `false` when no agent has the given id. Any transition is
    /// accepted.
    pub fn update_status(&mut self, id: &str, status: AgentStatus) -> bool {
        let Some(agent) = self.agents.get_mut(id) else {
            trace!(agent_id = id, "status update skipped: unknown agent");
            return false;
        };
        let previous = agent.status();
        agent.set_status(status);
        debug!(agent_id = id, from = %previous, to = %status, "updated agent status");
        true
    }

    /// Adds a capability to a registered agent.
    ///
    /// Returns `false` when the agent is unknown or already declares it.
    pub fn add_capability(&mut self, id: &str, raw_capability: impl Into<Capability>) -> bool {
        let capability = raw_capability.into();
        let Some(agent) = self.agents.get_mut(id) else {
            trace!(agent_id = id, "capability add skipped: unknown agent");
            return false;
        };
        if agent.has_capability(capability.as_str()) {
            return false;
        }
        self.index.insert(&capability, agent.id());
        debug!(agent_id = id, capability = %capability, "added agent capability");
        agent.push_capability(capability);
        true
    }

    /// Removes a capability from a registered agent.
    ///
    /// Returns `false` when the agent is unknown or does not declare it.
    pub fn remove_capability(&mut self, id: &str, capability: &str) -> bool {
        let Some(agent) = self.agents.get_mut(id) else {
            trace!(agent_id = id, "capability removal skipped: unknown agent");
            return false;
        };
        if !agent.drop_capability(capability) {
            return false;
        }
        self.index
            .remove(capability, agent.id(), self.config.prune_empty_capabilities);
        debug!(agent_id = id, capability, "removed agent capability");
        true
    }

    /// Returns the agent with the given id.
    #[must_use]
    pub fn get_agent(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Returns whether an agent with the given id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    /// Returns every agent in registration order.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Agent> {
        self.iter().collect()
    }

    /// Returns aggregate counts and the indexed capability keys.
    #[must_use]
    pub fn get_statistics(&self) -> RegistryStatistics {
        RegistryStatistics::tally(self.iter(), self.index.capabilities())
    }

    /// Returns the number of registered agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns `true` when no agents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.order.iter().filter_map(|id| self.agents.get(id))
    }

    fn capability_members(&self, capability: &str) -> impl Iterator<Item = &Agent> {
        self.index
            .ids(capability)
            .iter()
            .filter_map(|id| self.agents.get(id))
    }
}

fn select<'a>(
    candidates: impl Iterator<Item = &'a Agent>,
    query: &DiscoveryQuery,
) -> Vec<&'a Agent> {
    candidates
        .filter(|agent| query.matches(agent))
        .take(query.limit().unwrap_or(usize::MAX))
        .collect()
}
