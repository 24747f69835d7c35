//! Application services for the registrar record lifecycle.

mod manager;

pub use manager::{
    CreateRegistrarClusterRequest, RegistrarManager, RegistrarServiceError,
    RegistrarServiceResult,
};
