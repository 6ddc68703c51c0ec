//! Aggregate registry statistics.

use super::{Agent, AgentStatus, AgentType, Capability};
use serde::{Deserialize, Serialize};

/// Per-type agent counts. Every type is reported, zeros included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    /// Agents of type `nvidia`.
    pub nvidia: usize,
    /// Agents of type `trainium`.
    pub trainium: usize,
    /// Agents of type `tpu`.
    pub tpu: usize,
    /// Agents of type `cpu`.
    pub cpu: usize,
}

impl TypeCounts {
    /// Returns the count for `agent_type`.
    #[must_use]
    pub const fn get(&self, agent_type: AgentType) -> usize {
        match agent_type {
            AgentType::Nvidia => self.nvidia,
            AgentType::Trainium => self.trainium,
            AgentType::Tpu => self.tpu,
            AgentType::Cpu => self.cpu,
        }
    }

    const fn slot_mut(&mut self, agent_type: AgentType) -> &mut usize {
        match agent_type {
            AgentType::Nvidia => &mut self.nvidia,
            AgentType::Trainium => &mut self.trainium,
            AgentType::Tpu => &mut self.tpu,
            AgentType::Cpu => &mut self.cpu,
        }
    }

    /// Returns the sum over all types.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.nvidia + self.trainium + self.tpu + self.cpu
    }
}

/// Per-status agent counts. Every status is reported, zeros included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Agents in status `active`.
    pub active: usize,
    /// Agents in status `idle`.
    pub idle: usize,
    /// Agents in status `busy`.
    pub busy: usize,
    /// Agents in status `offline`.
    pub offline: usize,
}

impl StatusCounts {
    /// Returns the count for `status`.
    #[must_use]
    pub const fn get(&self, status: AgentStatus) -> usize {
        match status {
            AgentStatus::Active => self.active,
            AgentStatus::Idle => self.idle,
            AgentStatus::Busy => self.busy,
            AgentStatus::Offline => self.offline,
        }
    }

    const fn slot_mut(&mut self, status: AgentStatus) -> &mut usize {
        match status {
            AgentStatus::Active => &mut self.active,
            AgentStatus::Idle => &mut self.idle,
            AgentStatus::Busy => &mut self.busy,
            AgentStatus::Offline => &mut self.offline,
        }
    }

    /// Returns the sum over all statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.active + self.idle + self.busy + self.offline
    }
}

/// Snapshot of registry contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStatistics {
    /// Number of registered agents.
    pub total_agents: usize,
    /// Agent counts per type.
    pub by_type: TypeCounts,
    /// Agent counts per status.
    pub by_status: StatusCounts,
    /// Capability keys present in the index, in lexicographic order.
    ///
    /// Keys whose every agent has left stay listed unless the registry
    /// prunes empty entries.
    pub capabilities: Vec<Capability>,
}

impl RegistryStatistics {
    /// Tallies `agents` and records the index's capability keys.
    #[must_use]
    pub fn tally<'a>(
        agents: impl IntoIterator<Item = &'a Agent>,
        capabilities: impl IntoIterator<Item = &'a Capability>,
    ) -> Self {
        let mut statistics = Self {
            capabilities: capabilities.into_iter().cloned().collect(),
            ..Self::default()
        };
        for agent in agents {
            statistics.total_agents += 1;
            *statistics.by_type.slot_mut(agent.agent_type()) += 1;
            *statistics.by_status.slot_mut(agent.status()) += 1;
        }
        statistics
    }
}
