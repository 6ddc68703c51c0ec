//! When steps for agent registry BDD scenarios.

use super::world::{AgentWorld, build_request};
use rstest_bdd_macros::when;

#[when(r#"agent "{id}" is unregistered"#)]
fn unregister_agent(world: &mut AgentWorld, id: String) {
    world.last_unregister_result = Some(world.registry.unregister(&id));
}

#[when(r#"agent "{id}" is registered again with capabilities "{capabilities}""#)]
fn reregister_agent(
    world: &mut AgentWorld,
    id: String,
    capabilities: String,
) -> Result<(), eyre::Report> {
    let name = world
        .registry
        .get_agent(&id)
        .map(|agent| agent.name().to_owned())
        .ok_or_else(|| eyre::eyre!("agent '{id}' is not registered"))?;
    world
        .registry
        .register(build_request(&id, &name, &capabilities));
    Ok(())
}
