//! Store port for registrar record persistence.

use crate::registrar::domain::{
    RegistrarCluster, RegistrarClusterDraft, RegistrarClusterId, RegistrarLookup,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registrar store operations.
pub type RegistrarStoreResult<T> = Result<T, RegistrarStoreError>;

/// Registrar record persistence contract.
///
/// Implementations own identifier assignment: concurrent `put` calls must
/// never hand out the same identifier, and a deleted identifier is never
/// reused.
#[async_trait]
pub trait RegistrarStore: Send + Sync {
    /// Persists a new record and returns the identifier assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarStoreError::Conflict`] when the store detects a
    /// conflicting record, or [`RegistrarStoreError::Persistence`] on
    /// infrastructure failure.
    async fn put(&self, draft: &RegistrarClusterDraft) -> RegistrarStoreResult<RegistrarClusterId>;

    /// Reads the record matching `lookup`.
    ///
    /// Region lookups resolve to the earliest registered record carrying the
    /// region.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarStoreError::NotFound`] when nothing matches.
    async fn get(&self, lookup: &RegistrarLookup) -> RegistrarStoreResult<RegistrarCluster>;

    /// Returns every record in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarStoreError::Persistence`] on infrastructure failure.
    async fn list(&self) -> RegistrarStoreResult<Vec<RegistrarCluster>>;

    /// Removes the record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarStoreError::NotFound`] when the identifier does not
    /// exist.
    async fn delete(&self, id: RegistrarClusterId) -> RegistrarStoreResult<()>;
}

/// Errors returned by registrar store implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistrarStoreError {
    /// No record matches the lookup key.
    #[error("registrar cluster not found: {0}")]
    NotFound(RegistrarLookup),

    /// A conflicting record already exists.
    #[error("conflicting registrar cluster: {0}")]
    Conflict(String),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistrarStoreError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
