//! Validated human-readable cluster name.

use super::RegistrarDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a cluster name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Human-readable name of a registered cluster (e.g. `prod-east`).
///
/// Names are stored exactly as submitted; surrounding whitespace is kept. A
/// name must contain a non-whitespace character. Names are not unique: two
/// registrar records may carry the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterName(String);

impl ClusterName {
    /// Creates a validated cluster name, keeping the input verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarDomainError::EmptyClusterName`] when the value is
    /// blank, or [`RegistrarDomainError::ClusterNameTooLong`] when it exceeds
    /// 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrarDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(RegistrarDomainError::EmptyClusterName);
        }

        if raw.chars().count() > MAX_NAME_LENGTH {
            return Err(RegistrarDomainError::ClusterNameTooLong(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the cluster name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClusterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
