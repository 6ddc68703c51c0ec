//! Capability index consistency across mixed mutation sequences.

use super::helpers::{ids, register_fleet, registry, verify_index_consistency};
use agent_registry::registry::{
    config::RegistryConfig,
    domain::{AgentStatus, AgentType},
    services::{AgentRegistry, RegisterAgentRequest},
};
use rstest::rstest;

#[rstest]
fn index_stays_consistent_through_churn(mut registry: AgentRegistry) {
    register_fleet(&mut registry);
    verify_index_consistency(&registry);

    registry.unregister("cpu-a");
    verify_index_consistency(&registry);

    registry.register(
        RegisterAgentRequest::new("gpu-a", "GPU A v2", ["training"]).with_type(AgentType::Nvidia),
    );
    verify_index_consistency(&registry);

    registry.add_capability("gpu-b", "vision");
    registry.remove_capability("trn-a", "nlp");
    verify_index_consistency(&registry);

    registry.update_status("gpu-b", AgentStatus::Busy);
    verify_index_consistency(&registry);

    assert!(registry.find_by_capability("nlp").is_empty());
    assert_eq!(ids(&registry.find_by_capability("vision")), ["gpu-b"]);
    assert_eq!(ids(&registry.find_by_capability("training")), ["trn-a", "gpu-a"]);
}

#[rstest]
fn reregistering_keeps_position_in_listing(mut registry: AgentRegistry) {
    register_fleet(&mut registry);

    registry.register(RegisterAgentRequest::new("cpu-a", "CPU A v2", ["nlp", "audio"]));

    assert_eq!(
        ids(&registry.list_all()),
        ["gpu-a", "cpu-a", "trn-a", "gpu-b"]
    );
    assert_eq!(ids(&registry.find_by_capability("nlp")), ["cpu-a", "trn-a"]);
    verify_index_consistency(&registry);
}

#[rstest]
fn pruning_registry_forgets_emptied_capabilities() {
    let mut registry = AgentRegistry::with_config(RegistryConfig::pruning());
    register_fleet(&mut registry);

    registry.unregister("gpu-a");
    registry.remove_capability("trn-a", "training");

    let statistics = registry.get_statistics();
    assert_eq!(statistics.capabilities.len(), 2);
    assert!(!registry.capability_index().contains_capability("vision"));
    assert!(!registry.capability_index().contains_capability("training"));
    verify_index_consistency(&registry);
}
