/**
 * Server Initialization
 *
 * Builds the application from a loaded `ServerConfig`:
 * 1. Connect the signup store (if `DATABASE_URL` is set)
 * 2. Build the SMTP mailer (if SMTP is configured)
 * 3. Assemble `AppState` and the router
 *
 * A missing or broken optional service is logged and the server starts
 * without it. The routes that need it answer 503.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::TokenKeys;
use crate::backend::mail::SmtpMailer;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::signups::PgSignupStore;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing waitlist backend server");

    let mut state = AppState::new(
        config.admin.clone(),
        TokenKeys::new(config.jwt_secret.as_bytes()),
        config.cors.clone(),
    );

    if let Some(pool) = load_database(config.database.as_ref()).await {
        state = state.with_signups(Arc::new(PgSignupStore::new(pool)));
        tracing::info!("Signup store ready");
    }

    match &config.smtp {
        Some(smtp) => match SmtpMailer::new(smtp) {
            Ok(mailer) => {
                tracing::info!("SMTP relay {} ready, sending as {}", smtp.host, smtp.from);
                state = state.with_mailer(Arc::new(mailer));
            }
            Err(e) => {
                tracing::error!("Failed to build SMTP transport: {}", e);
                tracing::warn!("Mail features will be disabled.");
            }
        },
        None => tracing::warn!("SMTP not configured. Mail features will be disabled."),
    }

    tracing::info!("CORS policy: {:?}", config.cors.origins);

    create_router(state)
}
