//! `PostgreSQL` adapters for registrar persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresRegistrarStore, RegistrarPgPool};
