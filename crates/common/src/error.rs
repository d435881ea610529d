//! Common error types and the centralized HTTP error responder for Jobly

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Jobly application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Constraint(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for Error {
    /// Constraint violations are caused by the request, not the server, so they
    /// are surfaced as client errors instead of 500s.
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation => {
                    return Error::Constraint(db_err.message().to_string());
                }
                ErrorKind::UniqueViolation => {
                    return Error::Conflict(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Error::Database(err)
    }
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::Constraint(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to API clients. Server faults never leak their details.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Render the `{"error": {"message", "status"}}` body shared by every error response.
pub fn error_body(status: StatusCode, message: &str) -> Json<serde_json::Value> {
    Json(json!({
        "error": {
            "message": message,
            "status": status.as_u16(),
        }
    }))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Internal server error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request failed");
        }

        (status, error_body(status, &self.public_message())).into_response()
    }
}
