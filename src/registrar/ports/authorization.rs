//! Authorization gate port consulted before every registrar operation.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Authenticated caller identity for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Actor(String);

impl Actor {
    /// Creates an actor from an authenticated principal name.
    ///
    /// Returns `None` for blank names.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let raw = name.into();
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    /// Returns the principal name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operations a caller may be authorised to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistrarAction {
    /// Register a new cluster.
    Create,
    /// List registered clusters.
    List,
    /// Read a single registered cluster.
    Get,
    /// Remove a registered cluster.
    Delete,
}

impl RegistrarAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 4] = [Self::Create, Self::List, Self::Get, Self::Delete];

    /// Returns the policy vocabulary name for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::List => "list",
            Self::Get => "get",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for RegistrarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource classes guarded by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Registrar cluster records.
    RegistrarCluster,
}

impl ResourceKind {
    /// Returns the policy vocabulary name for this resource class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegistrarCluster => "registrar_cluster",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The actor may proceed.
    Allow,
    /// The actor is refused.
    Deny,
}

impl AccessDecision {
    /// Returns `true` for [`AccessDecision::Allow`].
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Failure to reach an authorization decision.
#[derive(Debug, Clone, Error)]
#[error("authorization gate unavailable: {0}")]
pub struct AuthorizationGateError(Arc<dyn std::error::Error + Send + Sync>);

impl AuthorizationGateError {
    /// Wraps an error from the underlying policy engine.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Allow/deny decision service for `(actor, action, resource)` triples.
#[async_trait]
pub trait AuthorizationGate: Send + Sync {
    /// Decides whether `actor` may perform `action` on `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationGateError`] when no decision can be reached.
    /// Callers must treat this as a refusal.
    async fn authorize(
        &self,
        actor: &Actor,
        action: RegistrarAction,
        resource: ResourceKind,
    ) -> Result<AccessDecision, AuthorizationGateError>;
}
