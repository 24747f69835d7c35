//! Error types for registrar domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing registrar domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrarDomainError {
    /// The cluster name is empty or whitespace only.
    #[error("name field is required")]
    EmptyClusterName,

    /// The cluster name exceeds the 255-character storage limit.
    #[error("cluster name exceeds 255 character limit: {0}")]
    ClusterNameTooLong(String),

    /// The region label is empty or whitespace only.
    #[error("region must not be blank")]
    EmptyRegion,

    /// The region label exceeds the 255-character storage limit.
    #[error("region exceeds 255 character limit: {0}")]
    RegionTooLong(String),

    /// No kubeconfig was supplied.
    #[error("kubeconfig field is required")]
    MissingKubeconfig,

    /// The kubeconfig was supplied as an empty document.
    #[error("kubeconfig must not be empty")]
    EmptyKubeconfig,

    /// The identifier is not a valid UUID.
    #[error("invalid registrar cluster identifier: {0}")]
    InvalidClusterId(String),
}
