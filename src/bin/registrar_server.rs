//! Serves the cluster registrar HTTP API.
//!
//! Configuration is read from the environment (see
//! [`cluster_registrar::config`]). With `REGISTRAR_DATABASE_URL` unset the
//! server keeps records in memory:
//!
//! ```text
//! REGISTRAR_ADMIN_ACTORS=alice REGISTRAR_LOG_LEVEL=debug registrar_server
//! ```
//!
//! Callers identify themselves through the `x-authenticated-user` header,
//! which the fronting authentication proxy is expected to set.

use cluster_registrar::{
    config::{ConfigError, RegistrarConfig, StoreConfig},
    registrar::{
        adapters::{
            memory::InMemoryRegistrarStore,
            policy::StaticAuthorizationGate,
            postgres::{PostgresRegistrarStore, RegistrarPgPool},
        },
        api::{self, ApiState},
        ports::RegistrarStore,
        services::RegistrarManager,
    },
    telemetry,
};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
    #[error("database pool setup task failed: {0}")]
    PoolTask(#[from] JoinError),
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = RegistrarConfig::from_env()?;
    telemetry::init(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_addr = %config.bind_addr,
        "cluster registrar starting"
    );

    let gate = Arc::new(config.authorization_gate());
    if gate.actor_count() == 0 {
        warn!("no actors are granted access; every request will be refused");
    }

    let result = match &config.store {
        StoreConfig::Memory => {
            warn!("using in-memory store; records are lost on restart");
            serve(Arc::new(InMemoryRegistrarStore::new()), gate, config.bind_addr).await
        }
        StoreConfig::Postgres { url, pool_size } => {
            let pool = build_pool(url.clone(), *pool_size).await?;
            info!(pool_size, "connected to PostgreSQL store");
            serve(Arc::new(PostgresRegistrarStore::new(pool)), gate, config.bind_addr).await
        }
    };

    if let Err(err) = &result {
        error!(error = %err, "cluster registrar exited with error");
    }
    result
}

async fn build_pool(url: String, pool_size: u32) -> Result<RegistrarPgPool, ServerError> {
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;
    Ok(pool)
}

async fn serve<S>(
    store: Arc<S>,
    gate: Arc<StaticAuthorizationGate>,
    addr: SocketAddr,
) -> Result<(), ServerError>
where
    S: RegistrarStore + 'static,
{
    let manager = RegistrarManager::new(store, Arc::new(DefaultClock));
    let app = api::router(ApiState::new(manager, gate));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "cluster registrar listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("cluster registrar stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
