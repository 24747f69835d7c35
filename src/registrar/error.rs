//! Closed error taxonomy shared by the registrar manager and handler layer.

use serde::Serialize;
use std::fmt;

/// Classification attached to every failure leaving the registrar core.
///
/// Callers branch on the kind; the handler layer maps it to a status code
/// without inspecting error content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller input failed a precondition.
    InvalidArgument,
    /// The referenced record does not exist.
    NotFound,
    /// A conflicting record already exists.
    AlreadyExists,
    /// The caller could not be identified.
    Unauthenticated,
    /// The authorization gate refused the action.
    Forbidden,
    /// Store or infrastructure failure.
    Internal,
}

impl ErrorKind {
    /// Returns the stable snake-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::Internal => "internal",
        }
    }

    /// Returns `true` when retrying the same request with backoff may succeed.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Internal)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
