/**
 * Backend Error Types
 *
 * `BackendError` is the single error type returned by HTTP handlers and
 * middleware. Every variant carries enough information to pick a status
 * code and a short client-facing message; internal causes are logged at the
 * point of failure and never rendered.
 *
 * # Status Code Mapping
 *
 * - `HandlerError` - the status stored in the error
 * - `Auth` - 400 / 401 / 403 depending on the auth failure
 * - `SharedError` - 400 Bad Request
 */

use thiserror::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use crate::backend::auth::AuthError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use waitlist::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Email not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Client-facing message
        message: String,
    },

    /// Login or token failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request body failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// Wrong HTTP verb for a known route
    pub fn method_not_allowed() -> Self {
        Self::handler(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// A collaborator (database, mail) is not configured
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Generic server error. Log the cause before constructing this.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => err.status_code(),
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.to_string(),
            Self::SharedError(err) => format!("Invalid input: {}", err),
        }
    }
}

/// Malformed or non-JSON request bodies
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::bad_request("Invalid JSON body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BackendError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(BackendError::method_not_allowed().status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(BackendError::unavailable("x").status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(BackendError::internal("x").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_auth_error() {
        let error: BackendError = AuthError::Forbidden.into();
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);

        let error: BackendError = AuthError::Unauthorized.into();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);

        let error: BackendError = AuthError::MissingCredentials.into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_shared_error() {
        let error: BackendError = SharedError::validation("email", "must contain '@'").into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.message().starts_with("Invalid input"));
    }
}
