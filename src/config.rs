//! Server configuration loaded from environment variables.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REGISTRAR_BIND_ADDR` | `0.0.0.0:8080` | HTTP listen address |
//! | `REGISTRAR_LOG_LEVEL` | `info` | tracing filter directive |
//! | `REGISTRAR_DATABASE_URL` | unset | `PostgreSQL` URL; unset selects the in-memory store |
//! | `REGISTRAR_DB_POOL_SIZE` | `8` | maximum pooled connections |
//! | `REGISTRAR_ADMIN_ACTORS` | empty | comma-separated actors granted every action |
//! | `REGISTRAR_READER_ACTORS` | empty | comma-separated actors granted `list` and `get` |

use crate::registrar::{adapters::policy::StaticAuthorizationGate, ports::Actor};
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be parsed.
    #[error("invalid value for {variable}: '{value}' ({reason})")]
    InvalidValue {
        /// Variable name.
        variable: &'static str,
        /// Raw value found in the environment.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Backing store selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Process-local store; contents are lost on restart.
    Memory,
    /// `PostgreSQL` store.
    Postgres {
        /// Connection URL.
        url: String,
        /// Maximum pooled connections.
        pool_size: u32,
    },
}

/// Runtime configuration for the registrar server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarConfig {
    /// HTTP listen address.
    pub bind_addr: SocketAddr,
    /// Tracing filter directive, e.g. `"cluster_registrar=debug,info"`.
    pub log_level: String,
    /// Backing store selection.
    pub store: StoreConfig,
    /// Actors granted every registrar action.
    pub admin_actors: Vec<Actor>,
    /// Actors granted read-only access.
    pub reader_actors: Vec<Actor>,
}

impl RegistrarConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_var(&lookup, "REGISTRAR_BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let log_level = non_blank(&lookup, "REGISTRAR_LOG_LEVEL")
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        let store = match non_blank(&lookup, "REGISTRAR_DATABASE_URL") {
            None => StoreConfig::Memory,
            Some(url) => {
                let pool_size: u32 = parse_var(
                    &lookup,
                    "REGISTRAR_DB_POOL_SIZE",
                    &DEFAULT_POOL_SIZE.to_string(),
                )?;
                if pool_size == 0 {
                    return Err(ConfigError::InvalidValue {
                        variable: "REGISTRAR_DB_POOL_SIZE",
                        value: pool_size.to_string(),
                        reason: "pool size must be positive".to_owned(),
                    });
                }
                StoreConfig::Postgres { url, pool_size }
            }
        };

        Ok(Self {
            bind_addr,
            log_level,
            store,
            admin_actors: actor_list(&lookup, "REGISTRAR_ADMIN_ACTORS"),
            reader_actors: actor_list(&lookup, "REGISTRAR_READER_ACTORS"),
        })
    }

    /// Builds the allow-list gate described by the actor lists.
    #[must_use]
    pub fn authorization_gate(&self) -> StaticAuthorizationGate {
        StaticAuthorizationGate::from_actors(
            self.admin_actors.iter().cloned(),
            self.reader_actors.iter().cloned(),
        )
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, variable: &str) -> Option<String> {
    lookup(variable)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = non_blank(lookup, variable).unwrap_or_else(|| default.to_owned());
    raw.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
        variable,
        reason: err.to_string(),
        value: raw.clone(),
    })
}

fn actor_list(lookup: &impl Fn(&str) -> Option<String>, variable: &str) -> Vec<Actor> {
    lookup(variable)
        .map(|value| value.split(',').filter_map(Actor::new).collect())
        .unwrap_or_default()
}
