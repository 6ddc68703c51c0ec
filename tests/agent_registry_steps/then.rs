//! Then steps for agent registry BDD scenarios.

use super::world::{AgentWorld, agent_ids, split_list};
use agent_registry::registry::domain::AgentStatus;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"agents with capability "{capability}" are "{expected}""#)]
fn agents_with_capability(
    world: &AgentWorld,
    capability: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let found = agent_ids(&world.registry.find_by_capability(&capability));
    let wanted = split_list(&expected);
    if found != wanted {
        return Err(eyre::eyre!(
            "expected {wanted:?} under '{capability}', found {found:?}"
        ));
    }
    Ok(())
}

#[then(r#"no agent has capability "{capability}""#)]
fn no_agent_has_capability(world: &AgentWorld, capability: String) -> Result<(), eyre::Report> {
    let found = agent_ids(&world.registry.find_by_capability(&capability));
    if !found.is_empty() {
        return Err(eyre::eyre!(
            "expected no agents under '{capability}', found {found:?}"
        ));
    }
    Ok(())
}

#[then(r#"the available agents are "{expected}""#)]
fn available_agents(world: &AgentWorld, expected: String) -> Result<(), eyre::Report> {
    let found = agent_ids(&world.registry.find_available());
    let wanted = split_list(&expected);
    if found != wanted {
        return Err(eyre::eyre!(
            "expected available agents {wanted:?}, found {found:?}"
        ));
    }
    Ok(())
}

#[then("the registry holds {count:usize} agents")]
fn registry_holds(world: &AgentWorld, count: usize) -> Result<(), eyre::Report> {
    let statistics = world.registry.get_statistics();
    if statistics.total_agents != count || world.registry.list_all().len() != count {
        return Err(eyre::eyre!(
            "expected {count} agents, statistics report {}",
            statistics.total_agents
        ));
    }
    Ok(())
}

#[then("the removal is reported as successful")]
fn removal_successful(world: &AgentWorld) -> Result<(), eyre::Report> {
    match world.last_unregister_result {
        Some(true) => Ok(()),
        other => Err(eyre::eyre!("expected successful removal, got {other:?}")),
    }
}

#[then("the removal is reported as unsuccessful")]
fn removal_unsuccessful(world: &AgentWorld) -> Result<(), eyre::Report> {
    match world.last_unregister_result {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected rejected removal, got {other:?}")),
    }
}

#[then(r#"the registry reports agent "{id}" as "{status}""#)]
fn agent_status_in_registry(
    world: &AgentWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = AgentStatus::try_from(status.as_str()).wrap_err("parse scenario status")?;
    let actual = world
        .registry
        .get_agent(&id)
        .map(|agent| agent.status())
        .ok_or_else(|| eyre::eyre!("agent '{id}' is not registered"))?;
    if actual != expected {
        return Err(eyre::eyre!("expected '{id}' to be {expected}, found {actual}"));
    }
    Ok(())
}
