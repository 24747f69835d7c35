//! Cluster registrar: control-plane registry for remote compute clusters.
//!
//! This crate records, retrieves, lists, and removes the registrar entries
//! (name, region, and kubeconfig credential) used to reach remote clusters,
//! and wraps that lifecycle in an authorization and error-mapping contract.
//!
//! # Architecture
//!
//! The registrar follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record types and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract store and authorization-gate traits
//! - **Adapters**: In-memory and `PostgreSQL` stores, a static allow-list gate
//! - **Services**: The registrar manager
//! - **API**: The axum handler layer
//!
//! # Modules
//!
//! - [`registrar`]: Registrar domain, ports, adapters, manager, and handlers
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod registrar;
pub mod telemetry;
