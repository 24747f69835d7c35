//! Domain model for cluster registrar records.
//!
//! A registrar record pairs a human-readable name and optional region with the
//! credential used to reach a remote cluster. Records are created once, read
//! any number of times, and hard-deleted. All infrastructure concerns are kept
//! outside the domain boundary.

mod cluster;
mod error;
mod ids;
mod kubeconfig;
mod lookup;
mod name;
mod region;

pub use cluster::{PersistedRegistrarClusterData, RegistrarCluster, RegistrarClusterDraft};
pub use error::RegistrarDomainError;
pub use ids::RegistrarClusterId;
pub use kubeconfig::Kubeconfig;
pub use lookup::{RegistrarLookup, shared_regions};
pub use name::ClusterName;
pub use region::Region;
