//! Registrar cluster record and its pre-persistence draft.

use super::{ClusterName, Kubeconfig, Region, RegistrarClusterId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated registrar input awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarClusterDraft {
    name: ClusterName,
    region: Option<Region>,
    kubeconfig: Kubeconfig,
    registered_at: DateTime<Utc>,
}

impl RegistrarClusterDraft {
    /// Creates a draft stamped with the current clock time.
    #[must_use]
    pub fn new(
        name: ClusterName,
        region: Option<Region>,
        kubeconfig: Kubeconfig,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            region,
            kubeconfig,
            registered_at: clock.utc(),
        }
    }

    /// Returns the cluster name.
    #[must_use]
    pub const fn name(&self) -> &ClusterName {
        &self.name
    }

    /// Returns the region label, if any.
    #[must_use]
    pub const fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Returns the credential blob.
    #[must_use]
    pub const fn kubeconfig(&self) -> &Kubeconfig {
        &self.kubeconfig
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Binds the draft to the identifier the store assigned to it.
    #[must_use]
    pub fn into_cluster(self, id: RegistrarClusterId) -> RegistrarCluster {
        RegistrarCluster {
            id,
            name: self.name,
            region: self.region,
            kubeconfig: self.kubeconfig,
            registered_at: self.registered_at,
        }
    }
}

/// Persisted registrar cluster record.
///
/// Records are immutable once stored; the only lifecycle transition after
/// creation is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarCluster {
    id: RegistrarClusterId,
    name: ClusterName,
    region: Option<Region>,
    kubeconfig: Kubeconfig,
    registered_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted registrar cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRegistrarClusterData {
    /// Persisted identifier.
    pub id: RegistrarClusterId,
    /// Persisted cluster name.
    pub name: ClusterName,
    /// Persisted region label.
    pub region: Option<Region>,
    /// Persisted credential blob.
    pub kubeconfig: Kubeconfig,
    /// Persisted registration timestamp.
    pub registered_at: DateTime<Utc>,
}

impl RegistrarCluster {
    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRegistrarClusterData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            region: data.region,
            kubeconfig: data.kubeconfig,
            registered_at: data.registered_at,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> RegistrarClusterId {
        self.id
    }

    /// Returns the cluster name.
    #[must_use]
    pub const fn name(&self) -> &ClusterName {
        &self.name
    }

    /// Returns the region label, if any.
    #[must_use]
    pub const fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Returns the credential blob.
    #[must_use]
    pub const fn kubeconfig(&self) -> &Kubeconfig {
        &self.kubeconfig
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Sort key giving listings and region lookups a deterministic order.
    #[must_use]
    pub const fn registration_order(&self) -> (DateTime<Utc>, RegistrarClusterId) {
        (self.registered_at, self.id)
    }
}
