//! Service layer owning the registrar record lifecycle.
//!
//! Provides [`RegistrarManager`] which validates input, delegates persistence
//! to a [`RegistrarStore`], and classifies every failure into an
//! [`ErrorKind`].

use crate::registrar::{
    domain::{
        ClusterName, Kubeconfig, Region, RegistrarCluster, RegistrarClusterDraft,
        RegistrarClusterId, RegistrarDomainError, RegistrarLookup,
    },
    error::ErrorKind,
    ports::{RegistrarStore, RegistrarStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Request payload for registering a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRegistrarClusterRequest {
    name: String,
    region: Option<String>,
    kubeconfig: Option<String>,
}

impl CreateRegistrarClusterRequest {
    /// Creates a request carrying only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
            kubeconfig: None,
        }
    }

    /// Sets the region label.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the credential document.
    #[must_use]
    pub fn with_kubeconfig(mut self, kubeconfig: impl Into<String>) -> Self {
        self.kubeconfig = Some(kubeconfig.into());
        self
    }

    /// Builds a request from optional wire fields.
    #[must_use]
    pub const fn from_parts(
        name: String,
        region: Option<String>,
        kubeconfig: Option<String>,
    ) -> Self {
        Self {
            name,
            region,
            kubeconfig,
        }
    }
}

/// Manager-level errors; every variant carries an [`ErrorKind`].
#[derive(Debug, Error)]
pub enum RegistrarServiceError {
    /// Input validation failed before the store was touched.
    #[error(transparent)]
    InvalidArgument(#[from] RegistrarDomainError),

    /// No record matches the lookup key.
    #[error("registrar cluster not found: {0}")]
    NotFound(RegistrarLookup),

    /// The region key cannot name any stored record.
    #[error("registrar cluster not found: region {0}")]
    RegionNotFound(String),

    /// The store reported a conflicting record.
    #[error("registrar cluster already exists: {0}")]
    AlreadyExists(String),

    /// Any other store failure.
    #[error("registrar store failure")]
    Internal(#[source] RegistrarStoreError),
}

impl RegistrarServiceError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) | Self::RegionNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<RegistrarStoreError> for RegistrarServiceError {
    fn from(err: RegistrarStoreError) -> Self {
        match err {
            RegistrarStoreError::NotFound(lookup) => Self::NotFound(lookup),
            RegistrarStoreError::Conflict(detail) => Self::AlreadyExists(detail),
            other @ (RegistrarStoreError::InvalidPersistedData(_)
            | RegistrarStoreError::Persistence(_)) => Self::Internal(other),
        }
    }
}

/// Result type for registrar manager operations.
pub type RegistrarServiceResult<T> = Result<T, RegistrarServiceError>;

/// Registrar record lifecycle manager.
///
/// Holds no state beyond shared handles to its store and clock, so clones are
/// cheap and may serve requests concurrently. The manager performs no
/// authorization; callers consult the gate first.
pub struct RegistrarManager<S, C>
where
    S: RegistrarStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for RegistrarManager<S, C>
where
    S: RegistrarStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> RegistrarManager<S, C>
where
    S: RegistrarStore,
    C: Clock + Send + Sync,
{
    /// Creates a new registrar manager.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Registers a new cluster and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarServiceError::InvalidArgument`] when the name is
    /// blank or the kubeconfig is missing, [`RegistrarServiceError::AlreadyExists`]
    /// when the store reports a conflict, and
    /// [`RegistrarServiceError::Internal`] for other store failures.
    pub async fn create(
        &self,
        request: CreateRegistrarClusterRequest,
    ) -> RegistrarServiceResult<RegistrarCluster> {
        let CreateRegistrarClusterRequest {
            name,
            region,
            kubeconfig,
        } = request;

        let cluster_name = ClusterName::new(name)?;
        let credential = Kubeconfig::required(kubeconfig)?;
        let cluster_region = Region::optional(region)?;

        let draft =
            RegistrarClusterDraft::new(cluster_name, cluster_region, credential, &*self.clock);
        let id = self
            .store
            .put(&draft)
            .await
            .map_err(|err| classify("create", err))?;
        let cluster = draft.into_cluster(id);

        info!(
            cluster_id = %cluster.id(),
            name = %cluster.name(),
            region = cluster.region().map(Region::as_str),
            kubeconfig_sha256 = %cluster.kubeconfig().fingerprint(),
            "registrar cluster created"
        );
        Ok(cluster)
    }

    /// Returns every registered cluster in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarServiceError::Internal`] when the store fails.
    pub async fn list(&self) -> RegistrarServiceResult<Vec<RegistrarCluster>> {
        let clusters = self.store.list().await.map_err(|err| classify("list", err))?;
        debug!(count = clusters.len(), "registrar clusters listed");
        Ok(clusters)
    }

    /// Reads one registered cluster.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarServiceError::NotFound`] when nothing matches and
    /// [`RegistrarServiceError::Internal`] for other store failures.
    pub async fn get(&self, lookup: RegistrarLookup) -> RegistrarServiceResult<RegistrarCluster> {
        let cluster = self
            .store
            .get(&lookup)
            .await
            .map_err(|err| classify("get", err))?;
        debug!(%lookup, cluster_id = %cluster.id(), "registrar cluster read");
        Ok(cluster)
    }

    /// Reads the earliest registered cluster carrying `region`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarServiceError::RegionNotFound`] without touching the
    /// store when `region` could never have been stored, otherwise the errors
    /// of [`RegistrarManager::get`].
    pub async fn get_by_region(&self, region: &str) -> RegistrarServiceResult<RegistrarCluster> {
        let Ok(key) = Region::new(region) else {
            debug!(region, "region key cannot match a stored record");
            return Err(RegistrarServiceError::RegionNotFound(region.to_owned()));
        };
        self.get(RegistrarLookup::Region(key)).await
    }

    /// Removes a registered cluster.
    ///
    /// Deleting an identifier twice reports `NotFound` the second time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarServiceError::NotFound`] when the identifier does not
    /// exist and [`RegistrarServiceError::Internal`] for other store failures.
    pub async fn delete(&self, id: RegistrarClusterId) -> RegistrarServiceResult<()> {
        self.store
            .delete(id)
            .await
            .map_err(|err| classify("delete", err))?;
        info!(cluster_id = %id, "registrar cluster deleted");
        Ok(())
    }
}

fn classify(operation: &'static str, err: RegistrarStoreError) -> RegistrarServiceError {
    let classified = RegistrarServiceError::from(err);
    if let RegistrarServiceError::Internal(source) = &classified {
        error!(operation, error = %source, "registrar store failure");
    }
    classified
}
