//! Allow-list authorization gate built from static grants.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};

use crate::registrar::ports::{
    AccessDecision, Actor, AuthorizationGate, AuthorizationGateError, RegistrarAction,
    ResourceKind,
};

/// Actions granted to read-only actors.
const READER_ACTIONS: [RegistrarAction; 2] = [RegistrarAction::List, RegistrarAction::Get];

/// Immutable grant table mapping actors to permitted registrar actions.
///
/// Actors without a grant are denied everything.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizationGate {
    grants: BTreeMap<Actor, BTreeSet<RegistrarAction>>,
}

impl StaticAuthorizationGate {
    /// Creates a gate that denies every actor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gate from admin and reader actor lists.
    #[must_use]
    pub fn from_actors(
        admins: impl IntoIterator<Item = Actor>,
        readers: impl IntoIterator<Item = Actor>,
    ) -> Self {
        let with_admins = admins.into_iter().fold(Self::new(), Self::with_admin);
        readers.into_iter().fold(with_admins, Self::with_reader)
    }

    /// Grants `actor` every registrar action.
    #[must_use]
    pub fn with_admin(self, actor: Actor) -> Self {
        self.grant(actor, RegistrarAction::ALL)
    }

    /// Grants `actor` read-only access (`list` and `get`).
    #[must_use]
    pub fn with_reader(self, actor: Actor) -> Self {
        self.grant(actor, READER_ACTIONS)
    }

    /// Adds `actions` to the grants held by `actor`.
    #[must_use]
    pub fn grant(
        mut self,
        actor: Actor,
        actions: impl IntoIterator<Item = RegistrarAction>,
    ) -> Self {
        self.grants.entry(actor).or_default().extend(actions);
        self
    }

    /// Returns the number of actors holding at least one grant.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.grants.len()
    }
}

#[async_trait]
impl AuthorizationGate for StaticAuthorizationGate {
    async fn authorize(
        &self,
        actor: &Actor,
        action: RegistrarAction,
        resource: ResourceKind,
    ) -> Result<AccessDecision, AuthorizationGateError> {
        let allowed = match resource {
            ResourceKind::RegistrarCluster => self
                .grants
                .get(actor)
                .is_some_and(|actions| actions.contains(&action)),
        };

        Ok(if allowed {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny
        })
    }
}
