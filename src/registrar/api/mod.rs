//! HTTP handler layer for the registrar.
//!
//! Routes:
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/registrar-clusters` | 201 + record |
//! | `GET` | `/registrar-clusters` | 200 + `{clusters, warnings?}` |
//! | `GET` | `/registrar-clusters/{region}` | 200 + record |
//! | `DELETE` | `/registrar-clusters/{id}` | 204 |
//! | `GET` | `/healthz` | 200 |
//!
//! The caller identity comes from the [`AUTHENTICATED_ACTOR_HEADER`] header
//! and is passed to the gate on every request.

mod actor;
mod dto;
mod error;
mod handlers;

pub use actor::AUTHENTICATED_ACTOR_HEADER;
pub use dto::{ListRegistrarClustersBody, RegistrarClusterBody};
pub use error::{ApiError, status_for};

use crate::registrar::{
    ports::{
        AccessDecision, Actor, AuthorizationGate, RegistrarAction, RegistrarStore, ResourceKind,
    },
    services::RegistrarManager,
};
use axum::{Router, routing::get};
use mockable::Clock;
use std::sync::Arc;
use tracing::{error, warn};

/// Shared state handed to every registrar handler.
pub struct ApiState<S, G, C>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    manager: RegistrarManager<S, C>,
    gate: Arc<G>,
}

impl<S, G, C> Clone for ApiState<S, G, C>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            manager: self.manager.clone(),
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<S, G, C> ApiState<S, G, C>
where
    S: RegistrarStore,
    G: AuthorizationGate,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a manager and an authorization gate.
    #[must_use]
    pub const fn new(manager: RegistrarManager<S, C>, gate: Arc<G>) -> Self {
        Self { manager, gate }
    }

    async fn authorize(&self, actor: &Actor, action: RegistrarAction) -> Result<(), ApiError> {
        match self
            .gate
            .authorize(actor, action, ResourceKind::RegistrarCluster)
            .await
        {
            Ok(AccessDecision::Allow) => Ok(()),
            Ok(AccessDecision::Deny) => {
                warn!(%actor, %action, "registrar action denied");
                Err(ApiError::forbidden(action))
            }
            Err(err) => {
                error!(%actor, %action, error = %err, "authorization gate failed");
                Err(ApiError::internal())
            }
        }
    }
}

/// Builds the registrar router.
pub fn router<S, G, C>(state: ApiState<S, G, C>) -> Router
where
    S: RegistrarStore + 'static,
    G: AuthorizationGate + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/registrar-clusters",
            get(handlers::list_clusters::<S, G, C>).post(handlers::create_cluster::<S, G, C>),
        )
        .route(
            "/registrar-clusters/{key}",
            get(handlers::get_cluster::<S, G, C>).delete(handlers::delete_cluster::<S, G, C>),
        )
        .route("/healthz", get(handlers::health))
        .with_state(state)
}
