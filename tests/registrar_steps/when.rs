//! When steps for registrar cluster BDD scenarios.

use super::world::{KUBECONFIG, RegistrarWorld};
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#""{actor}" registers a cluster named "{name}" in region "{region}""#)]
fn register_cluster(
    world: &mut RegistrarWorld,
    actor: String,
    name: String,
    region: String,
) -> Result<(), eyre::Report> {
    let payload = json!({ "name": name, "region": region, "kubeconfig": KUBECONFIG });
    let exchange = world.send(Method::POST, "/registrar-clusters", &actor, Some(payload))?;
    if exchange.0 == StatusCode::CREATED {
        world.last_registered_id = exchange
            .1
            .get("id")
            .and_then(|value| value.as_str())
            .map(str::to_owned);
    }
    world.last_registration = Some(exchange);
    Ok(())
}

#[when(r#""{actor}" deletes the last registered cluster"#)]
fn delete_last_cluster(world: &mut RegistrarWorld, actor: String) -> Result<(), eyre::Report> {
    let id = world
        .last_registered_id
        .clone()
        .ok_or_else(|| eyre::eyre!("no registered cluster to delete"))?;
    let (status, body) = world.send(
        Method::DELETE,
        &format!("/registrar-clusters/{id}"),
        &actor,
        None,
    )?;
    if status != StatusCode::NO_CONTENT {
        return Err(eyre::eyre!("delete failed with {status}: {body}"));
    }
    Ok(())
}
