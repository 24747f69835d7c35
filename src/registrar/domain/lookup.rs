//! Access paths for reading a single registrar record.

use super::{Region, RegistrarCluster, RegistrarClusterId};
use std::collections::BTreeMap;
use std::fmt;

/// Key used to read one registrar record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistrarLookup {
    /// Match on the store-assigned identifier.
    Id(RegistrarClusterId),
    /// Match on the region label. When several records share the region, the
    /// earliest registered one wins.
    Region(Region),
}

impl RegistrarLookup {
    /// Returns `true` when `cluster` satisfies this lookup key.
    #[must_use]
    pub fn matches(&self, cluster: &RegistrarCluster) -> bool {
        match self {
            Self::Id(id) => cluster.id() == *id,
            Self::Region(region) => cluster.region() == Some(region),
        }
    }
}

impl From<RegistrarClusterId> for RegistrarLookup {
    fn from(id: RegistrarClusterId) -> Self {
        Self::Id(id)
    }
}

impl From<Region> for RegistrarLookup {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl fmt::Display for RegistrarLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Region(region) => write!(f, "region {region}"),
        }
    }
}

/// Returns every region carried by more than one record, with its count.
///
/// Region lookups on such a label can only ever reach the earliest record, so
/// listings surface these as warnings.
#[must_use]
pub fn shared_regions(clusters: &[RegistrarCluster]) -> Vec<(Region, usize)> {
    let mut counts: BTreeMap<&Region, usize> = BTreeMap::new();
    for region in clusters.iter().filter_map(RegistrarCluster::region) {
        *counts.entry(region).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(region, count)| (region.clone(), count))
        .collect()
}
