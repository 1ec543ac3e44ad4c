/**
 * Authentication Middleware
 *
 * Protects administrator routes. The `Authorization` header is checked
 * before the protected handler runs, and before its body is read:
 *
 * ```text
 * Start ─┬─ no header ──────────────────────────► Rejected(401)
 *        └─ header ─► parse ─┬─ malformed ──────► Rejected(403)
 *                            ├─ bad sig/expired ► Rejected(403)
 *                            └─ valid ──────────► Authenticated
 * ```
 *
 * The token is whatever follows the first space of the header value. The
 * scheme name itself is not checked.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::{AuthError, Claims, TokenKeys};
use crate::backend::error::BackendError;

/// Result of authenticating one request
///
/// `Terminated` already holds the rejection response; the caller must return
/// it and do nothing else.
#[derive(Debug)]
pub enum AuthOutcome {
    Continue(Claims),
    Terminated(Response),
}

/// Authenticate a request from its headers
pub fn authenticate(headers: &HeaderMap, keys: &TokenKeys) -> AuthOutcome {
    match authorize(headers, keys) {
        Ok(claims) => AuthOutcome::Continue(claims),
        Err(e) => AuthOutcome::Terminated(BackendError::from(e).into_response()),
    }
}

/// Validate the `Authorization` header and decode its claims
///
/// # Errors
///
/// * `Unauthorized` - header absent or empty
/// * `Forbidden` - no token after the first space, or the token fails
///   signature or expiry checks
pub fn authorize(headers: &HeaderMap, keys: &TokenKeys) -> Result<Claims, AuthError> {
    let header = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!("Missing Authorization header");
            return Err(AuthError::Unauthorized);
        }
    };

    let token = header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| {
            tracing::warn!("Malformed Authorization header");
            AuthError::Forbidden
        })?;

    keys.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        AuthError::Forbidden
    })
}

/// Second space-separated segment of the header value
fn bearer_token(value: &str) -> Option<&str> {
    value.split(' ').nth(1).filter(|token| !token.is_empty())
}

/// Administrator authentication middleware
///
/// On success the decoded claims are inserted into the request extensions
/// for `AdminUser`.
pub async fn require_admin(
    State(keys): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &keys) {
        AuthOutcome::Terminated(response) => response,
        AuthOutcome::Continue(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
    }
}

/// Axum extractor for the authenticated administrator
///
/// Only usable behind `require_admin`.
#[derive(Clone, Debug)]
pub struct AdminUser(pub Claims);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Claims not found in request extensions");
                BackendError::from(AuthError::Unauthorized)
            })?;

        Ok(AdminUser(claims))
    }
}
