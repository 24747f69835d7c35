//! Embedded `PostgreSQL` fixtures for registrar store tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use cluster_registrar::registrar::adapters::postgres::PostgresRegistrarStore;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::Clock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_cluster};
use tokio::runtime::Runtime;

/// Schema applied to the template database.
const CREATE_REGISTRAR_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_registrar_clusters/up.sql");

/// Template database name for the pre-migrated schema.
const TEMPLATE_DB: &str = "registrar_test_template";

type SetupError = Box<dyn std::error::Error + Send + Sync>;

/// Returns the shared cluster, or `None` when it cannot be started here.
fn cluster() -> Option<&'static TestCluster> {
    match shared_cluster() {
        Ok(cluster) => Some(cluster),
        Err(err) => {
            eprintln!("SKIP-TEST-CLUSTER: embedded PostgreSQL unavailable: {err}");
            None
        }
    }
}

/// Ensures the template database exists with the schema applied.
fn ensure_template(cluster: &TestCluster) -> Result<(), SetupError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            execute_sql_statements(&mut conn, CREATE_REGISTRAR_SQL)?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as SetupError)?;
    Ok(())
}

/// Executes each statement of a migration script.
///
/// `diesel::sql_query` runs one statement per call, so the script is split on
/// semicolons and comment-only fragments are skipped.
fn execute_sql_statements(conn: &mut PgConnection, sql: &str) -> eyre::Result<()> {
    for statement in sql.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() || trimmed.lines().all(|line| line.trim().starts_with("--")) {
            continue;
        }
        diesel::sql_query(trimmed)
            .execute(conn)
            .map_err(|e| eyre::eyre!("SQL error: {e}\nStatement: {trimmed}"))?;
    }
    Ok(())
}

/// Guard that drops the per-test database even if the test panics.
struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// A migrated database cloned from the template, with a store over it.
pub struct TestDatabase {
    // Declared before the guard so pooled connections close before the drop.
    store: PostgresRegistrarStore,
    _guard: CleanupGuard,
}

impl TestDatabase {
    /// Creates a fresh database, or returns `None` when no cluster is available.
    pub fn create(prefix: &str) -> Option<Self> {
        let cluster = cluster()?;
        ensure_template(cluster).expect("template setup");
        let db_name = format!("{prefix}_{}", uuid::Uuid::new_v4().simple());
        let guard = CleanupGuard {
            cluster,
            db_name: db_name.clone(),
        };
        let store = setup_store(cluster, &db_name).expect("store setup");
        Some(Self {
            store,
            _guard: guard,
        })
    }

    /// Returns the store bound to this database.
    pub const fn store(&self) -> &PostgresRegistrarStore {
        &self.store
    }
}

fn setup_store(
    cluster: &TestCluster,
    db_name: &str,
) -> Result<PostgresRegistrarStore, SetupError> {
    cluster
        .create_database_from_template(db_name, TEMPLATE_DB)
        .map_err(|e| Box::new(e) as SetupError)?;
    let url = cluster.connection().database_url(db_name);
    let manager = ConnectionManager::<PgConnection>::new(url);
    // A single connection keeps statement ordering deterministic.
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| Box::new(e) as SetupError)?;
    Ok(PostgresRegistrarStore::new(pool))
}

/// Creates a tokio runtime for driving the async store.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Returns a clock `seconds` after a fixed base instant.
    ///
    /// Whole seconds survive the microsecond precision of `TIMESTAMPTZ`.
    pub fn at_offset(seconds: i64) -> Self {
        let base = Utc
            .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
            .single()
            .expect("valid instant");
        Self(base + TimeDelta::seconds(seconds))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
