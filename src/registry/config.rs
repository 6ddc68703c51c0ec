//! Registry configuration.

/// Tunable behaviour of an [`AgentRegistry`](super::services::AgentRegistry).
///
/// # Examples
///
/// ```
/// use agent_registry::registry::config::RegistryConfig;
///
/// let config = RegistryConfig::default();
/// assert!(!config.prune_empty_capabilities);
///
/// let pruning = RegistryConfig::pruning();
/// assert!(pruning.prune_empty_capabilities);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Drop a capability index entry once its last agent leaves.
    ///
    /// When unset, emptied entries stay in the index and keep appearing in
    /// [`RegistryStatistics::capabilities`](super::domain::RegistryStatistics).
    pub prune_empty_capabilities: bool,
}

impl RegistryConfig {
    /// Creates a configuration that prunes emptied capability entries.
    #[must_use]
    pub const fn pruning() -> Self {
        Self {
            prune_empty_capabilities: true,
        }
    }
}
