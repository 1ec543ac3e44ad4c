/**
 * Waitlist Signup Handlers
 *
 * - `POST /api/subscribe` - join the waitlist (public)
 * - `GET /api/subscribe` - list signups (administrator)
 * - `DELETE /api/subscribe?email=...` - remove a signup (administrator)
 *
 * Database failures are logged and answered with a generic 500.
 */

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::AdminUser;
use crate::backend::server::state::AppState;
use crate::backend::signups::db::StoreError;
use crate::shared::{NewSignup, Signup};

/// Body of `POST /api/subscribe`
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubscribeResponse {
    pub message: String,
    pub user: Signup,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupListResponse {
    pub message: String,
    pub emails: Vec<Signup>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string of `DELETE /api/subscribe`
#[derive(Deserialize, Debug, Default)]
pub struct DeleteParams {
    pub email: Option<String>,
}

/// Join the waitlist
///
/// # Errors
///
/// * `400 Bad Request` - missing name/email, or email without `@`
/// * `409 Conflict` - email already on the waitlist
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - insert failed
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<SubscribeResponse>, BackendError> {
    let Json(request) = payload?;
    let signup = NewSignup::parse(
        request.first_name.as_deref(),
        request.last_name.as_deref(),
        request.email.as_deref(),
    )?;

    let store = state.signup_store()?;
    let user = store.insert(&signup).await.map_err(|e| match e {
        StoreError::Duplicate(email) => {
            tracing::info!("Duplicate waitlist signup: {}", email);
            BackendError::conflict("Email already on the waitlist")
        }
        other => {
            tracing::error!("Error inserting signup: {:?}", other);
            BackendError::internal("Error inserting data")
        }
    })?;

    tracing::info!("Added {} to waitlist", user.email);

    Ok(Json(SubscribeResponse {
        message: "Successfully added to waitlist".to_string(),
        user,
    }))
}

/// List every signup
pub async fn list_signups(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
) -> Result<Json<SignupListResponse>, BackendError> {
    let store = state.signup_store()?;
    let emails = store.list().await.map_err(|e| {
        tracing::error!("Error fetching signups: {:?}", e);
        BackendError::internal("Error fetching data")
    })?;

    tracing::debug!("{} listed {} signups", claims.username, emails.len());

    Ok(Json(SignupListResponse {
        message: "Emails retrieved successfully".to_string(),
        emails,
    }))
}

/// Remove a signup by email
///
/// # Errors
///
/// * `400 Bad Request` - no `email` query parameter
/// * `404 Not Found` - no signup with that email
pub async fn delete_signup(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Query(params): Query<DeleteParams>,
) -> Result<Json<MessageResponse>, BackendError> {
    let email = params
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| BackendError::bad_request("Email is required"))?;

    let store = state.signup_store()?;
    let deleted = store.delete_by_email(&email).await.map_err(|e| {
        tracing::error!("Error deleting signup: {:?}", e);
        BackendError::internal("Error deleting data")
    })?;

    if !deleted {
        return Err(BackendError::not_found("Email not found"));
    }

    tracing::info!("{} removed {} from waitlist", claims.username, email);

    Ok(Json(MessageResponse {
        message: format!("Successfully deleted the email: {}", email),
    }))
}
