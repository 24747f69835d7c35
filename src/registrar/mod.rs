//! Cluster registrar: records, retrieves, lists, and removes the entries
//! describing how to reach remote compute clusters.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The lifecycle manager in [`services`]
//! - The HTTP handler layer in [`api`]
//!
//! Failures leaving the core are classified by [`error::ErrorKind`].

pub mod adapters;
pub mod api;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
