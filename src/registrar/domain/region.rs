//! Free-form region label.

use super::RegistrarDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_REGION_LENGTH: usize = 255;

/// Classification label attached to a registrar record (e.g. `us-east`).
///
/// Regions double as a lookup key for `GET /registrar-clusters/{region}` and
/// are matched exactly, so the label is stored as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Creates a region label, keeping the input verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarDomainError::EmptyRegion`] for blank input and
    /// [`RegistrarDomainError::RegionTooLong`] past 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrarDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(RegistrarDomainError::EmptyRegion);
        }

        if raw.chars().count() > MAX_REGION_LENGTH {
            return Err(RegistrarDomainError::RegionTooLong(raw));
        }

        Ok(Self(raw))
    }

    /// Parses an optional region. Only `None` means absent.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Region::new`] for a supplied value, so a
    /// blank region is rejected rather than dropped.
    pub fn optional(value: Option<String>) -> Result<Option<Self>, RegistrarDomainError> {
        value.map(Self::new).transpose()
    }

    /// Returns the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
