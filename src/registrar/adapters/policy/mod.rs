//! Authorization gate adapters.

mod static_gate;

pub use static_gate::StaticAuthorizationGate;
