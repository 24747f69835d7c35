//! Then steps for registrar cluster BDD scenarios.

use super::world::{RegistrarWorld, expect_error_kind};
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the registration succeeds")]
fn registration_succeeds(world: &RegistrarWorld) -> Result<(), eyre::Report> {
    let (status, body) = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if *status != StatusCode::CREATED {
        return Err(eyre::eyre!("expected 201, got {status}: {body}"));
    }
    Ok(())
}

#[then(r#"the registration fails with "{kind}""#)]
fn registration_fails(world: &RegistrarWorld, kind: String) -> Result<(), eyre::Report> {
    let exchange = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    expect_error_kind(exchange, &kind)
}

#[then(r#"reading region "{region}" as "{actor}" returns the cluster "{name}""#)]
fn read_region_returns(
    world: &mut RegistrarWorld,
    region: String,
    actor: String,
    name: String,
) -> Result<(), eyre::Report> {
    let (status, body) = world.send(
        Method::GET,
        &format!("/registrar-clusters/{region}"),
        &actor,
        None,
    )?;
    if status != StatusCode::OK {
        return Err(eyre::eyre!("expected 200, got {status}: {body}"));
    }
    if body.get("name").and_then(Value::as_str) != Some(name.as_str()) {
        return Err(eyre::eyre!("expected cluster '{name}', got {body}"));
    }
    Ok(())
}

#[then(r#"reading region "{region}" as "{actor}" fails with "{kind}""#)]
fn read_region_fails(
    world: &mut RegistrarWorld,
    region: String,
    actor: String,
    kind: String,
) -> Result<(), eyre::Report> {
    let exchange = world.send(
        Method::GET,
        &format!("/registrar-clusters/{region}"),
        &actor,
        None,
    )?;
    expect_error_kind(&exchange, &kind)
}

#[then(r#"deleting the last registered cluster again as "{actor}" fails with "{kind}""#)]
fn delete_again_fails(
    world: &mut RegistrarWorld,
    actor: String,
    kind: String,
) -> Result<(), eyre::Report> {
    let id = world
        .last_registered_id
        .clone()
        .ok_or_else(|| eyre::eyre!("no registered cluster in scenario world"))?;
    let exchange = world.send(
        Method::DELETE,
        &format!("/registrar-clusters/{id}"),
        &actor,
        None,
    )?;
    expect_error_kind(&exchange, &kind)
}

#[then(r#"listing clusters as "{actor}" returns {count:usize} entries"#)]
fn listing_returns_count(
    world: &mut RegistrarWorld,
    actor: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let (status, body) = world.send(Method::GET, "/registrar-clusters", &actor, None)?;
    if status != StatusCode::OK {
        return Err(eyre::eyre!("expected 200, got {status}: {body}"));
    }
    let found = body
        .get("clusters")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if found != count {
        return Err(eyre::eyre!("expected {count} clusters, found {found}"));
    }
    Ok(())
}

#[then(r#"listing clusters as "{actor}" fails with "{kind}""#)]
fn listing_fails(
    world: &mut RegistrarWorld,
    actor: String,
    kind: String,
) -> Result<(), eyre::Report> {
    let exchange = world.send(Method::GET, "/registrar-clusters", &actor, None)?;
    expect_error_kind(&exchange, &kind)
}

#[then(r#"listing clusters as "{actor}" reports {count:usize} shared region warning"#)]
fn listing_reports_warnings(
    world: &mut RegistrarWorld,
    actor: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let (status, body) = world.send(Method::GET, "/registrar-clusters", &actor, None)?;
    if status != StatusCode::OK {
        return Err(eyre::eyre!("expected 200, got {status}: {body}"));
    }
    let found = body
        .get("warnings")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if found != count {
        return Err(eyre::eyre!("expected {count} warnings, found {found}: {body}"));
    }
    Ok(())
}
