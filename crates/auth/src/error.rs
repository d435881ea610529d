//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jobly_common::error::error_body;

/// Authentication error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    /// Valid token, but the route requires an admin
    AdminRequired,
}

impl AuthError {
    fn message(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "Authorization header required",
            AuthError::InvalidAuthorizationFormat => "Invalid authorization header format",
            AuthError::InvalidToken => "Invalid or expired token",
            AuthError::AdminRequired => "Admin privileges required",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Non-admin callers get 401 like unauthenticated ones
        let status = StatusCode::UNAUTHORIZED;
        tracing::debug!(reason = self.message(), "Rejected request");
        (status, error_body(status, self.message())).into_response()
    }
}
