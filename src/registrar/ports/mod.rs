//! Port contracts for registrar persistence and authorization.
//!
//! Ports define infrastructure-agnostic interfaces used by the registrar
//! manager and the request handler layer.

pub mod authorization;
pub mod store;

pub use authorization::{
    AccessDecision, Actor, AuthorizationGate, AuthorizationGateError, RegistrarAction,
    ResourceKind,
};
pub use store::{RegistrarStore, RegistrarStoreError, RegistrarStoreResult};
