/**
 * Login Handler
 *
 * POST /api/login
 *
 * 1. Check the body for a username and password
 * 2. Compare them with the configured administrator pair
 * 3. Issue a JWT valid for one hour
 *
 * Passwords are never logged.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not JSON, or username/password is missing
/// * `401 Unauthorized` - credentials do not match the administrator
/// * `500 Internal Server Error` - token signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "admin", "password": "..." }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;

    let principal = state
        .admin
        .verify(request.username.as_deref(), request.password.as_deref())
        .map_err(|e| {
            tracing::warn!("Login rejected: {}", e);
            e
        })?;

    let token = state.tokens.issue(&principal).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("Failed to issue token")
    })?;

    tracing::info!("Administrator logged in: {}", principal.username);

    Ok(Json(TokenResponse { token }))
}
