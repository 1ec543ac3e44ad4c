/**
 * Application State
 *
 * `AppState` is built once at startup and cloned into every handler. All
 * fields are immutable after construction; the collaborators behind the
 * trait objects do their own synchronisation.
 *
 * # Example
 *
 * ```rust
 * use waitlist::backend::auth::{AdminCredentials, TokenKeys};
 * use waitlist::backend::middleware::CorsConfig;
 * use waitlist::backend::server::state::AppState;
 *
 * let state = AppState::new(
 *     AdminCredentials::new("admin", "secret"),
 *     TokenKeys::new(b"jwt-secret"),
 *     CorsConfig::default(),
 * );
 * assert!(state.signups.is_none());
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{AdminCredentials, TokenKeys};
use crate::backend::error::BackendError;
use crate::backend::mail::Mailer;
use crate::backend::middleware::cors::CorsConfig;
use crate::backend::signups::SignupStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The administrator login
    pub admin: Arc<AdminCredentials>,

    /// Token signing and verification keys
    pub tokens: Arc<TokenKeys>,

    /// Origin policy applied to every route
    pub cors: Arc<CorsConfig>,

    /// Signup persistence. `None` if `DATABASE_URL` is not configured.
    pub signups: Option<Arc<dyn SignupStore>>,

    /// Outbound mail. `None` if SMTP is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(admin: AdminCredentials, tokens: TokenKeys, cors: CorsConfig) -> Self {
        Self {
            admin: Arc::new(admin),
            tokens: Arc::new(tokens),
            cors: Arc::new(cors),
            signups: None,
            mailer: None,
        }
    }

    pub fn with_signups(mut self, store: Arc<dyn SignupStore>) -> Self {
        self.signups = Some(store);
        self
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// The signup store, or `503` if the database is not configured
    pub fn signup_store(&self) -> Result<Arc<dyn SignupStore>, BackendError> {
        self.signups.clone().ok_or_else(|| {
            tracing::error!("Database not configured");
            BackendError::unavailable("Database not configured")
        })
    }

    /// The mailer, or `503` if SMTP is not configured
    pub fn mailer(&self) -> Result<Arc<dyn Mailer>, BackendError> {
        self.mailer.clone().ok_or_else(|| {
            tracing::error!("Mail transport not configured");
            BackendError::unavailable("Mail transport not configured")
        })
    }
}

/// Lets middleware extract the token keys with `State<Arc<TokenKeys>>`
impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Lets middleware extract the CORS policy with `State<Arc<CorsConfig>>`
impl FromRef<AppState> for Arc<CorsConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cors.clone()
    }
}
