//! Wire representations of registrar records.

use crate::registrar::{
    domain::{RegistrarCluster, shared_regions},
    services::CreateRegistrarClusterRequest,
};
use serde::{Deserialize, Serialize};

/// Registrar record as it appears on the wire.
///
/// `id` and `kubeconfig` are optional so the same shape serves partial
/// representations; creation still requires `name` and `kubeconfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarClusterBody {
    /// Store-assigned identifier; ignored on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable cluster name.
    #[serde(default)]
    pub name: String,
    /// Optional region label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Credential document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,
}

impl RegistrarClusterBody {
    /// Converts a create payload into a manager request.
    #[must_use]
    pub fn into_create_request(self) -> CreateRegistrarClusterRequest {
        CreateRegistrarClusterRequest::from_parts(self.name, self.region, self.kubeconfig)
    }
}

impl From<&RegistrarCluster> for RegistrarClusterBody {
    fn from(cluster: &RegistrarCluster) -> Self {
        Self {
            id: Some(cluster.id().to_string()),
            name: cluster.name().as_str().to_owned(),
            region: cluster.region().map(|region| region.as_str().to_owned()),
            kubeconfig: Some(cluster.kubeconfig().as_str().to_owned()),
        }
    }
}

/// Response body for `GET /registrar-clusters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRegistrarClustersBody {
    /// Registered clusters in registration order.
    pub clusters: Vec<RegistrarClusterBody>,
    /// Advisory notes about the listing, omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl From<&[RegistrarCluster]> for ListRegistrarClustersBody {
    fn from(clusters: &[RegistrarCluster]) -> Self {
        let warnings: Vec<String> = shared_regions(clusters)
            .into_iter()
            .map(|(region, count)| {
                format!(
                    "region '{region}' is shared by {count} registrar clusters; \
                     lookups by region return the earliest registered"
                )
            })
            .collect();

        Self {
            clusters: clusters.iter().map(RegistrarClusterBody::from).collect(),
            warnings: (!warnings.is_empty()).then_some(warnings),
        }
    }
}
