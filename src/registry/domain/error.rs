//! Error types for agent registry domain parsing and conversion.

use thiserror::Error;

/// Error returned while parsing an agent type from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent type: {0}")]
pub struct ParseAgentTypeError(pub String);

/// Error returned while parsing an agent status from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent status: {0}")]
pub struct ParseAgentStatusError(pub String);

/// Error returned while parsing a protocol from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown protocol: {0}")]
pub struct ParseProtocolError(pub String);

/// Errors returned while converting arbitrary JSON into agent metadata.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataConversionError {
    /// JSON `null` has no metadata counterpart.
    #[error("metadata value at '{0}' is null")]
    NullValue(String),

    /// Top-level metadata must be a JSON object.
    #[error("agent metadata must be a JSON object")]
    NotAnObject,
}
