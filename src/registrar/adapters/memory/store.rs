//! In-memory registrar store for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::registrar::{
    domain::{
        Region, RegistrarCluster, RegistrarClusterDraft, RegistrarClusterId, RegistrarLookup,
    },
    ports::{RegistrarStore, RegistrarStoreError, RegistrarStoreResult},
};

/// Thread-safe in-memory registrar store.
///
/// Listings and region lookups follow [`RegistrarCluster::registration_order`],
/// matching the `PostgreSQL` store. Identifiers are random v4 UUIDs; like the
/// database default, uniqueness against deleted records rests on the size of
/// the UUID space.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistrarStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    clusters: HashMap<RegistrarClusterId, RegistrarCluster>,
    region_index: HashMap<Region, Vec<RegistrarClusterId>>,
}

impl InMemoryStoreState {
    fn next_id(&self) -> RegistrarClusterId {
        loop {
            let candidate = RegistrarClusterId::new();
            if !self.clusters.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn earliest_in(&self, region: &Region) -> Option<&RegistrarCluster> {
        self.region_index
            .get(region)?
            .iter()
            .filter_map(|id| self.clusters.get(id))
            .min_by_key(|cluster| cluster.registration_order())
    }
}

impl InMemoryRegistrarStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> RegistrarStoreError {
    RegistrarStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RegistrarStore for InMemoryRegistrarStore {
    async fn put(&self, draft: &RegistrarClusterDraft) -> RegistrarStoreResult<RegistrarClusterId> {
        let mut state = self.state.write().map_err(poisoned)?;

        let id = state.next_id();
        let cluster = draft.clone().into_cluster(id);

        if let Some(region) = cluster.region() {
            state
                .region_index
                .entry(region.clone())
                .or_default()
                .push(id);
        }
        state.clusters.insert(id, cluster);
        Ok(id)
    }

    async fn get(&self, lookup: &RegistrarLookup) -> RegistrarStoreResult<RegistrarCluster> {
        let state = self.state.read().map_err(poisoned)?;

        let found = match lookup {
            RegistrarLookup::Id(id) => state.clusters.get(id),
            RegistrarLookup::Region(region) => state.earliest_in(region),
        };

        found
            .cloned()
            .ok_or_else(|| RegistrarStoreError::NotFound(lookup.clone()))
    }

    async fn list(&self) -> RegistrarStoreResult<Vec<RegistrarCluster>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut clusters: Vec<RegistrarCluster> = state.clusters.values().cloned().collect();
        clusters.sort_by_key(RegistrarCluster::registration_order);
        Ok(clusters)
    }

    async fn delete(&self, id: RegistrarClusterId) -> RegistrarStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;

        let removed = state
            .clusters
            .remove(&id)
            .ok_or(RegistrarStoreError::NotFound(RegistrarLookup::Id(id)))?;

        if let Some(region) = removed.region()
            && let Some(ids) = state.region_index.get_mut(region)
        {
            ids.retain(|existing| *existing != id);
            if ids.is_empty() {
                state.region_index.remove(region);
            }
        }
        Ok(())
    }
}
