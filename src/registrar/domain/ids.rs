//! Identifier types for the registrar domain.

use super::RegistrarDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Store-assigned identifier for a registrar cluster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrarClusterId(Uuid);

impl RegistrarClusterId {
    /// Creates a new random identifier.
    ///
    /// Only stores call this; the manager never mints identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RegistrarClusterId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for RegistrarClusterId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for RegistrarClusterId {
    type Err = RegistrarDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| RegistrarDomainError::InvalidClusterId(value.to_owned()))
    }
}

impl fmt::Display for RegistrarClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
