//! Per-request actor resolution.

use super::ApiError;
use crate::registrar::ports::Actor;
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

/// Header carrying the caller identity set by the fronting authentication
/// proxy.
pub const AUTHENTICATED_ACTOR_HEADER: &str = "x-authenticated-user";

impl<St> FromRequestParts<St> for Actor
where
    St: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(AUTHENTICATED_ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::new);

        actor.ok_or_else(|| {
            debug!(uri = %parts.uri, "request without authenticated actor");
            ApiError::unauthenticated()
        })
    }
}
