//! Open-ended metadata attached to registered agents.

use super::MetadataConversionError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// A single metadata value.
///
/// Mirrors JSON without `null`: absence is expressed by leaving the key out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer or finite floating-point number.
    Number(Number),
    /// Text value.
    String(String),
    /// Ordered list of values.
    List(Vec<MetadataValue>),
    /// Nested string-keyed map.
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Returns the text value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a flag.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the value as `i64`, if this is an integral number in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// Returns the value as `f64`, if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    fn from_json(value: Value, path: &str) -> Result<Self, MetadataConversionError> {
        match value {
            Value::Null => Err(MetadataConversionError::NullValue(path.to_owned())),
            Value::Bool(flag) => Ok(Self::Bool(flag)),
            Value::Number(number) => Ok(Self::Number(number)),
            Value::String(text) => Ok(Self::String(text)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(position, item)| Self::from_json(item, &format!("{path}[{position}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| {
                    let nested = format!("{path}.{key}");
                    Self::from_json(item, &nested).map(|converted| (key, converted))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Map),
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<MetadataValue>> for MetadataValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, MetadataValue>> for MetadataValue {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Map(value)
    }
}

impl TryFrom<Value> for MetadataValue {
    type Error = MetadataConversionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value, "$")
    }
}

impl From<MetadataValue> for Value {
    fn from(value: MetadataValue) -> Self {
        match value {
            MetadataValue::Bool(flag) => Self::Bool(flag),
            MetadataValue::Number(number) => Self::Number(number),
            MetadataValue::String(text) => Self::String(text),
            MetadataValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            MetadataValue::Map(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

/// String-keyed metadata map carried by an agent record.
///
/// # Examples
///
/// ```
/// use agent_registry::registry::domain::AgentMetadata;
///
/// let metadata = AgentMetadata::new()
///     .with_entry("region", "eu-west-1")
///     .with_entry("gpus", 8_u64);
/// assert_eq!(metadata.len(), 2);
/// assert_eq!(
///     metadata.get("region").and_then(|value| value.as_str()),
///     Some("eu-west-1")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentMetadata(BTreeMap<String, MetadataValue>);

impl AgentMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds an entry, replacing any previous value under the same key.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry and returns the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, MetadataValue)> for AgentMetadata {
    fn from_iter<I: IntoIterator<Item = (String, MetadataValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for AgentMetadata {
    type Error = MetadataConversionError;

    /// Converts a JSON object into metadata, rejecting `null` anywhere.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(entries) = value else {
            return Err(MetadataConversionError::NotAnObject);
        };
        entries
            .into_iter()
            .map(|(key, item)| {
                let path = format!("$.{key}");
                MetadataValue::from_json(item, &path).map(|converted| (key, converted))
            })
            .collect()
    }
}

impl From<AgentMetadata> for Value {
    fn from(metadata: AgentMetadata) -> Self {
        Self::Object(
            metadata
                .0
                .into_iter()
                .map(|(key, item)| (key, Self::from(item)))
                .collect(),
        )
    }
}
