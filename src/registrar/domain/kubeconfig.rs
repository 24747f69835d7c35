//! Opaque cluster credential.

use super::RegistrarDomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Credential document used to reach a remote cluster.
///
/// The contents are never parsed: the registrar stores and returns the blob
/// verbatim. `Debug` output is redacted so records can be logged safely; use
/// [`Kubeconfig::fingerprint`] to correlate credentials in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kubeconfig(String);

impl Kubeconfig {
    /// Wraps a credential document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarDomainError::EmptyKubeconfig`] when the document
    /// is empty. Whitespace-only documents are kept verbatim.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrarDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(RegistrarDomainError::EmptyKubeconfig);
        }
        Ok(Self(raw))
    }

    /// Wraps an optional credential document, rejecting absent values.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarDomainError::MissingKubeconfig`] for `None` and
    /// [`RegistrarDomainError::EmptyKubeconfig`] for empty documents.
    pub fn required(value: Option<String>) -> Result<Self, RegistrarDomainError> {
        value
            .ok_or(RegistrarDomainError::MissingKubeconfig)
            .and_then(Self::new)
    }

    /// Returns the raw document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the credential and returns the raw document.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the lowercase hex SHA-256 digest of the document.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        format!("{:x}", Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Debug for Kubeconfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kubeconfig").field(&"<redacted>").finish()
    }
}
