//! Adapter implementations for registrar store and authorization ports.

pub mod memory;
pub mod policy;
pub mod postgres;
