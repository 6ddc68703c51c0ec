//! In-memory integration tests for agent registration and discovery.

use super::helpers::{ids, register_fleet, registry};
use agent_registry::registry::{
    domain::{AgentMetadata, AgentStatus, AgentType, DiscoveryQuery, MetadataValue},
    services::{AgentRegistry, RegisterAgentRequest},
};
use chrono::Utc;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn register_two_agents_and_find_by_capability(mut registry: AgentRegistry) {
    registry.register(RegisterAgentRequest::new("a1", "Agent 1", ["nlp", "vision"]));
    registry.register(RegisterAgentRequest::new("a2", "Agent 2", ["nlp"]));

    assert_eq!(ids(&registry.find_by_capability("nlp")), ["a1", "a2"]);
    assert_eq!(ids(&registry.find_by_capability("vision")), ["a1"]);
    assert_eq!(registry.get_statistics().total_agents, 2);
}

#[rstest]
fn registration_timestamp_is_taken_at_register_time(mut registry: AgentRegistry) {
    let before = Utc::now();
    let registered_at = registry
        .register(RegisterAgentRequest::new("a1", "Agent 1", ["nlp"]))
        .registered_at();
    let after = Utc::now();

    assert!(registered_at >= before && registered_at <= after);
}

#[rstest]
fn metadata_from_json_is_stored_verbatim(mut registry: AgentRegistry) {
    let metadata = AgentMetadata::try_from(json!({
        "endpoint": "http://10.0.0.5:8080",
        "protocol": "a2a",
        "gpus": 4
    }))
    .expect("valid metadata");
    registry.register(
        RegisterAgentRequest::new("gpu-a", "GPU A", ["vision"])
            .with_type(AgentType::Nvidia)
            .with_metadata(metadata.clone()),
    );

    let agent = registry.get_agent("gpu-a").expect("registered");
    assert_eq!(agent.metadata(), &metadata);
    assert_eq!(
        agent.metadata().get("gpus").and_then(MetadataValue::as_i64),
        Some(4)
    );
}

#[rstest]
fn statistics_include_zero_counts(mut registry: AgentRegistry) {
    register_fleet(&mut registry);
    registry.update_status("gpu-a", AgentStatus::Busy);

    let statistics = registry.get_statistics();
    let encoded = serde_json::to_value(&statistics).expect("statistics serialise");

    assert_eq!(encoded["total_agents"], json!(4));
    assert_eq!(
        encoded["by_type"],
        json!({ "nvidia": 2, "trainium": 1, "tpu": 0, "cpu": 1 })
    );
    assert_eq!(
        encoded["by_status"],
        json!({ "active": 0, "idle": 3, "busy": 1, "offline": 0 })
    );
    assert_eq!(
        encoded["capabilities"],
        json!(["inference", "nlp", "training", "vision"])
    );
}

#[rstest]
fn status_changes_drive_availability(mut registry: AgentRegistry) {
    register_fleet(&mut registry);
    registry.update_status("gpu-a", AgentStatus::Offline);
    registry.update_status("cpu-a", AgentStatus::Active);
    registry.update_status("trn-a", AgentStatus::Busy);

    assert_eq!(ids(&registry.find_available()), ["cpu-a", "gpu-b"]);

    registry.update_status("gpu-a", AgentStatus::Idle);
    assert_eq!(ids(&registry.find_available()), ["gpu-a", "cpu-a", "gpu-b"]);
}

#[rstest]
fn discover_available_inference_agents(mut registry: AgentRegistry) {
    register_fleet(&mut registry);
    registry.update_status("gpu-a", AgentStatus::Busy);

    let found = registry.discover(
        &DiscoveryQuery::new()
            .with_capability("inference")
            .with_type(AgentType::Nvidia)
            .available_only(),
    );

    assert_eq!(ids(&found), ["gpu-b"]);
}

#[rstest]
fn unregistered_agent_disappears_everywhere(mut registry: AgentRegistry) {
    register_fleet(&mut registry);

    assert!(registry.unregister("trn-a"));
    assert!(!registry.unregister("trn-a"));

    assert!(!registry.contains("trn-a"));
    assert_eq!(ids(&registry.find_by_capability("nlp")), ["cpu-a"]);
    assert!(registry.find_by_capability("training").is_empty());
    assert!(registry.find_by_type(AgentType::Trainium).is_empty());
    assert_eq!(registry.len(), registry.list_all().len());
}
