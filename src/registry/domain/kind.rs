//! Compute class of a registered agent.

use super::ParseAgentTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware class an agent runs on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    /// NVIDIA GPU worker.
    Nvidia,
    /// AWS Trainium accelerator.
    Trainium,
    /// Google TPU accelerator.
    Tpu,
    /// General-purpose CPU worker.
    #[default]
    Cpu,
}

impl AgentType {
    /// Every agent type in declaration order.
    pub const ALL: [Self; 4] = [Self::Nvidia, Self::Trainium, Self::Tpu, Self::Cpu];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nvidia => "nvidia",
            Self::Trainium => "trainium",
            Self::Tpu => "tpu",
            Self::Cpu => "cpu",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AgentType {
    type Error = ParseAgentTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "nvidia" => Ok(Self::Nvidia),
            "trainium" => Ok(Self::Trainium),
            "tpu" => Ok(Self::Tpu),
            "cpu" => Ok(Self::Cpu),
            _ => Err(ParseAgentTypeError(value.to_owned())),
        }
    }
}
