//! Agent wire protocol vocabulary.

use super::ParseProtocolError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol an agent speaks.
///
/// The registry attaches no behaviour to this type. It exists so hosts can
/// share one vocabulary when storing protocol hints in agent metadata.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Model Context Protocol.
    Mcp,
    /// Agent-to-agent protocol.
    A2a,
    /// Host-defined protocol.
    #[default]
    Custom,
    /// Plain HTTP.
    Http,
}

impl Protocol {
    /// Every protocol in declaration order.
    pub const ALL: [Self; 4] = [Self::Mcp, Self::A2a, Self::Custom, Self::Http];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mcp => "mcp",
            Self::A2a => "a2a",
            Self::Custom => "custom",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Protocol {
    type Error = ParseProtocolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "mcp" => Ok(Self::Mcp),
            "a2a" => Ok(Self::A2a),
            "custom" => Ok(Self::Custom),
            "http" => Ok(Self::Http),
            _ => Err(ParseProtocolError(value.to_owned())),
        }
    }
}
