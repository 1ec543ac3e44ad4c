/**
 * Mail Handlers
 *
 * - `POST /api/sendEmail` - send one message (administrator)
 * - `POST /api/sendBulkEmail` - mail every signup in one BCC message
 *   addressed to the sender (administrator)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::mail::OutgoingMail;
use crate::backend::middleware::AdminUser;
use crate::backend::server::state::AppState;
use crate::backend::signups::handlers::MessageResponse;

/// Body of `POST /api/sendEmail`
///
/// `to` may hold several comma-separated addresses.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SendEmailRequest {
    pub to: Option<String>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
}

/// Body of `POST /api/sendBulkEmail`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct BulkEmailRequest {
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
}

/// Send a single email
///
/// # Errors
///
/// * `400 Bad Request` - missing `to` or `subject`
/// * `503 Service Unavailable` - SMTP not configured
/// * `500 Internal Server Error` - delivery failed
pub async fn send_email(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(request) = payload?;

    let to = request
        .to
        .as_deref()
        .map(split_addresses)
        .filter(|addresses| !addresses.is_empty())
        .ok_or_else(|| BackendError::bad_request("Recipient is required"))?;
    let subject = non_empty(request.subject)
        .ok_or_else(|| BackendError::bad_request("Subject is required"))?;

    let mailer = state.mailer()?;
    let recipients = to.len();
    mailer
        .send(OutgoingMail {
            to,
            bcc: Vec::new(),
            subject,
            text: request.text,
            html: request.html,
        })
        .await
        .map_err(|e| {
            tracing::error!("Error sending email: {:?}", e);
            BackendError::internal("Failed to send email")
        })?;

    tracing::info!("{} sent an email to {} recipient(s)", claims.username, recipients);

    Ok(Json(MessageResponse {
        message: "Email sent successfully".to_string(),
    }))
}

/// Send one message to every signup
///
/// # Errors
///
/// * `400 Bad Request` - missing `subject`
/// * `404 Not Found` - the waitlist is empty
/// * `503 Service Unavailable` - database or SMTP not configured
/// * `500 Internal Server Error` - query or delivery failed
pub async fn send_bulk_email(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    payload: Result<Json<BulkEmailRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(request) = payload?;
    let subject = non_empty(request.subject)
        .ok_or_else(|| BackendError::bad_request("Subject is required"))?;

    let store = state.signup_store()?;
    let mailer = state.mailer()?;

    let emails = store.emails().await.map_err(|e| {
        tracing::error!("Error loading signup emails: {:?}", e);
        BackendError::internal("Failed to send bulk email")
    })?;

    if emails.is_empty() {
        return Err(BackendError::not_found("No emails found in database"));
    }

    let recipients = emails.len();
    mailer
        .send(OutgoingMail {
            to: vec![mailer.sender().to_string()],
            bcc: emails,
            subject,
            text: request.text,
            html: request.html,
        })
        .await
        .map_err(|e| {
            tracing::error!("Error sending bulk email: {:?}", e);
            BackendError::internal("Failed to send bulk email")
        })?;

    tracing::info!("{} sent a bulk email to {} signups", claims.username, recipients);

    Ok(Json(MessageResponse {
        message: "Bulk email sent successfully".to_string(),
    }))
}

fn split_addresses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_addresses() {
        assert_eq!(
            split_addresses("a@example.com, b@example.com,,"),
            vec!["a@example.com".to_string(), "b@example.com".to_string()]
        );
        assert!(split_addresses(" , ").is_empty());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Hi".to_string())), Some("Hi".to_string()));
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }
}
