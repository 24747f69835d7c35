//! Diesel row models for registrar cluster persistence.

use super::schema::registrar_clusters;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for registrar cluster records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = registrar_clusters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RegistrarClusterRow {
    /// Store-assigned identifier.
    pub id: uuid::Uuid,
    /// Human-readable cluster name.
    pub name: String,
    /// Optional region label.
    pub region: Option<String>,
    /// Opaque credential document.
    pub kubeconfig: String,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Insert model for registrar cluster records.
///
/// The identifier is omitted so the database default assigns it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = registrar_clusters)]
pub struct NewRegistrarClusterRow {
    /// Human-readable cluster name.
    pub name: String,
    /// Optional region label.
    pub region: Option<String>,
    /// Opaque credential document.
    pub kubeconfig: String,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}
