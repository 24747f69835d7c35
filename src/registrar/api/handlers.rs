//! Request handlers for the registrar HTTP surface.
//!
//! Every handler resolves the actor, consults the gate, and only then calls
//! the manager. Error kinds are mapped to status codes by [`ApiError`].

use super::{
    ApiError, ApiState,
    dto::{ListRegistrarClustersBody, RegistrarClusterBody},
};
use crate::registrar::{
    domain::RegistrarClusterId,
    error::ErrorKind,
    ports::{Actor, AuthorizationGate, RegistrarAction, RegistrarStore},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use serde_json::{Value, json};
use tracing::warn;

/// `POST /registrar-clusters`
pub(super) async fn create_cluster<S, G, C>(
    State(state): State<ApiState<S, G, C>>,
    actor: Actor,
    body: Bytes,
) -> Result<(StatusCode, Json<RegistrarClusterBody>), ApiError>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    state.authorize(&actor, RegistrarAction::Create).await?;

    let payload: RegistrarClusterBody = serde_json::from_slice(&body).map_err(|err| {
        warn!(%actor, error = %err, "malformed create registrar cluster body");
        ApiError::new(
            ErrorKind::InvalidArgument,
            format!("malformed request body: {err}"),
        )
    })?;

    let cluster = state
        .manager
        .create(payload.into_create_request())
        .await?;
    Ok((StatusCode::CREATED, Json(RegistrarClusterBody::from(&cluster))))
}

/// `GET /registrar-clusters`
pub(super) async fn list_clusters<S, G, C>(
    State(state): State<ApiState<S, G, C>>,
    actor: Actor,
) -> Result<Json<ListRegistrarClustersBody>, ApiError>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    state.authorize(&actor, RegistrarAction::List).await?;
    let clusters = state.manager.list().await?;
    Ok(Json(ListRegistrarClustersBody::from(clusters.as_slice())))
}

/// `GET /registrar-clusters/{region}`
pub(super) async fn get_cluster<S, G, C>(
    State(state): State<ApiState<S, G, C>>,
    actor: Actor,
    Path(region): Path<String>,
) -> Result<Json<RegistrarClusterBody>, ApiError>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    state.authorize(&actor, RegistrarAction::Get).await?;
    let cluster = state.manager.get_by_region(&region).await?;
    Ok(Json(RegistrarClusterBody::from(&cluster)))
}

/// `DELETE /registrar-clusters/{id}`
pub(super) async fn delete_cluster<S, G, C>(
    State(state): State<ApiState<S, G, C>>,
    actor: Actor,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    state.authorize(&actor, RegistrarAction::Delete).await?;

    // A segment that is not a UUID cannot name any record.
    let id: RegistrarClusterId = raw_id.parse().map_err(|_| {
        ApiError::new(
            ErrorKind::NotFound,
            format!("registrar cluster not found: id {raw_id}"),
        )
    })?;

    state.manager.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /healthz`
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
