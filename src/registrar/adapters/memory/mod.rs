//! In-memory adapters for registrar persistence.

mod store;

pub use store::InMemoryRegistrarStore;
