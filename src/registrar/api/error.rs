//! Mapping from the error taxonomy to HTTP responses.

use crate::registrar::{error::ErrorKind, services::RegistrarServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "internal error";

/// Error returned by registrar handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: ErrorKind,
    message: &'a str,
}

impl ApiError {
    /// Creates an error of the given kind.
    ///
    /// Internal errors always carry a generic message so no infrastructure
    /// detail reaches the caller.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = match kind {
            ErrorKind::Internal => INTERNAL_MESSAGE.to_owned(),
            _ => message.into(),
        };
        Self { kind, message }
    }

    /// Caller identity was missing from the request.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(ErrorKind::Unauthenticated, "authenticated actor is required")
    }

    /// The gate refused the action.
    #[must_use]
    pub fn forbidden(action: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Forbidden, format!("{action} is not permitted"))
    }

    /// Infrastructure failure; detail must already be logged.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal, INTERNAL_MESSAGE)
    }

    /// Returns the taxonomy kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the caller-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status for this error's kind.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        status_for(self.kind)
    }
}

/// Maps an error kind to its HTTP status code.
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<RegistrarServiceError> for ApiError {
    fn from(err: RegistrarServiceError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind,
            message: &self.message,
        };
        (self.status(), Json(body)).into_response()
    }
}
