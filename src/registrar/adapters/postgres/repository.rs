//! `PostgreSQL` store implementation for registrar clusters.

use super::{
    models::{NewRegistrarClusterRow, RegistrarClusterRow},
    schema::registrar_clusters,
};
use crate::registrar::{
    domain::{
        ClusterName, Kubeconfig, PersistedRegistrarClusterData, Region, RegistrarCluster,
        RegistrarClusterDraft, RegistrarClusterId, RegistrarLookup,
    },
    ports::{RegistrarStore, RegistrarStoreError, RegistrarStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by registrar adapters.
pub type RegistrarPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed registrar store.
#[derive(Debug, Clone)]
pub struct PostgresRegistrarStore {
    pool: RegistrarPgPool,
}

impl PostgresRegistrarStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RegistrarPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RegistrarStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RegistrarStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RegistrarStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RegistrarStoreError::persistence)?
    }
}

#[async_trait]
impl RegistrarStore for PostgresRegistrarStore {
    async fn put(&self, draft: &RegistrarClusterDraft) -> RegistrarStoreResult<RegistrarClusterId> {
        let new_row = to_new_row(draft);

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(registrar_clusters::table)
                .values(&new_row)
                .returning(registrar_clusters::id)
                .get_result::<uuid::Uuid>(connection)
                .map_err(map_insert_error)?;
            Ok(RegistrarClusterId::from_uuid(id))
        })
        .await
    }

    async fn get(&self, lookup: &RegistrarLookup) -> RegistrarStoreResult<RegistrarCluster> {
        let key = lookup.clone();

        self.run_blocking(move |connection| {
            let row = match &key {
                RegistrarLookup::Id(id) => registrar_clusters::table
                    .filter(registrar_clusters::id.eq(id.into_inner()))
                    .select(RegistrarClusterRow::as_select())
                    .first::<RegistrarClusterRow>(connection)
                    .optional(),
                RegistrarLookup::Region(region) => registrar_clusters::table
                    .filter(registrar_clusters::region.eq(region.as_str()))
                    .order((
                        registrar_clusters::registered_at.asc(),
                        registrar_clusters::id.asc(),
                    ))
                    .select(RegistrarClusterRow::as_select())
                    .first::<RegistrarClusterRow>(connection)
                    .optional(),
            }
            .map_err(RegistrarStoreError::persistence)?;

            row.map(row_to_cluster)
                .transpose()?
                .ok_or(RegistrarStoreError::NotFound(key))
        })
        .await
    }

    async fn list(&self) -> RegistrarStoreResult<Vec<RegistrarCluster>> {
        self.run_blocking(move |connection| {
            let rows = registrar_clusters::table
                .order((
                    registrar_clusters::registered_at.asc(),
                    registrar_clusters::id.asc(),
                ))
                .select(RegistrarClusterRow::as_select())
                .load::<RegistrarClusterRow>(connection)
                .map_err(RegistrarStoreError::persistence)?;
            rows.into_iter().map(row_to_cluster).collect()
        })
        .await
    }

    async fn delete(&self, id: RegistrarClusterId) -> RegistrarStoreResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                registrar_clusters::table.filter(registrar_clusters::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(RegistrarStoreError::persistence)?;

            if deleted == 0 {
                return Err(RegistrarStoreError::NotFound(RegistrarLookup::Id(id)));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(draft: &RegistrarClusterDraft) -> NewRegistrarClusterRow {
    NewRegistrarClusterRow {
        name: draft.name().as_str().to_owned(),
        region: draft.region().map(|region| region.as_str().to_owned()),
        kubeconfig: draft.kubeconfig().as_str().to_owned(),
        registered_at: draft.registered_at(),
    }
}

fn row_to_cluster(row: RegistrarClusterRow) -> RegistrarStoreResult<RegistrarCluster> {
    let RegistrarClusterRow {
        id,
        name,
        region,
        kubeconfig,
        registered_at,
    } = row;

    let parsed_name = ClusterName::new(name).map_err(RegistrarStoreError::invalid_persisted_data)?;
    let parsed_region =
        Region::optional(region).map_err(RegistrarStoreError::invalid_persisted_data)?;
    let parsed_kubeconfig =
        Kubeconfig::new(kubeconfig).map_err(RegistrarStoreError::invalid_persisted_data)?;

    Ok(RegistrarCluster::from_persisted(PersistedRegistrarClusterData {
        id: RegistrarClusterId::from_uuid(id),
        name: parsed_name,
        region: parsed_region,
        kubeconfig: parsed_kubeconfig,
        registered_at,
    }))
}

fn map_insert_error(err: DieselError) -> RegistrarStoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
            let detail = info
                .constraint_name()
                .map_or_else(|| info.message().to_owned(), str::to_owned);
            RegistrarStoreError::Conflict(detail)
        }
        _ => RegistrarStoreError::persistence(err),
    }
}
