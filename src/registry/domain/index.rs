//! Inverted index from capability tag to declaring agents.

use super::{AgentId, Capability};
use std::collections::BTreeMap;

/// Maps each capability to the ids of the agents declaring it.
///
/// Each entry behaves as an ordered set: an id appears at most once and ids
/// keep the order in which they joined the entry. Entries may be empty once
/// every declaring agent has left; they are only dropped when the caller
/// asks for pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityIndex {
    entries: BTreeMap<Capability, Vec<AgentId>>,
}

impl CapabilityIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds `id` under `capability`, creating the entry if needed.
    ///
    /// Returns `false` when the id was already present.
    pub fn insert(&mut self, capability: &Capability, id: &AgentId) -> bool {
        let ids = self.entries.entry(capability.clone()).or_default();
        if ids.contains(id) {
            return false;
        }
        ids.push(id.clone());
        true
    }

    /// Removes `id` from the entry for `capability`.
    ///
    /// With `prune` set, an entry left empty is deleted. Returns whether the
    /// id was present.
    pub fn remove(&mut self, capability: &str, id: &AgentId, prune: bool) -> bool {
        let Some(ids) = self.entries.get_mut(capability) else {
            return false;
        };
        let before = ids.len();
        ids.retain(|existing| existing != id);
        let removed = ids.len() != before;
        if prune && ids.is_empty() {
            self.entries.remove(capability);
        }
        removed
    }

    /// Returns the ids under `capability` in join order.
    #[must_use]
    pub fn ids(&self, capability: &str) -> &[AgentId] {
        self.entries
            .get(capability)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether an entry (possibly empty) exists for `capability`.
    #[must_use]
    pub fn contains_capability(&self, capability: &str) -> bool {
        self.entries.contains_key(capability)
    }

    /// Iterates over every capability key in lexicographic order.
    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.entries.keys()
    }

    /// Returns the number of capability entries, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there are no capability entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
