//! Test server and token helpers

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use waitlist::backend::auth::{AdminCredentials, Principal, TokenKeys};
use waitlist::backend::middleware::CorsConfig;
use waitlist::backend::routes::create_router;
use waitlist::backend::server::AppState;

use super::fakes::{MemorySignupStore, RecordingMailer};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse";
pub const JWT_SECRET: &[u8] = b"integration-test-secret";
pub const ALLOWED_ORIGIN: &str = "https://jointhewaitlist.netlify.app";

/// A running app plus handles on its collaborators
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemorySignupStore>,
    pub mailer: Arc<RecordingMailer>,
}

fn base_state(cors: CorsConfig) -> AppState {
    AppState::new(
        AdminCredentials::new(ADMIN_USERNAME, ADMIN_PASSWORD),
        TokenKeys::new(JWT_SECRET),
        cors,
    )
}

/// App with both collaborators configured
pub fn test_app() -> TestApp {
    test_app_with(MemorySignupStore::new(), RecordingMailer::new(), CorsConfig::default())
}

pub fn test_app_with(store: MemorySignupStore, mailer: RecordingMailer, cors: CorsConfig) -> TestApp {
    let store = Arc::new(store);
    let mailer = Arc::new(mailer);
    let state = base_state(cors)
        .with_signups(store.clone())
        .with_mailer(mailer.clone());

    TestApp {
        server: TestServer::new(create_router(state)).unwrap(),
        store,
        mailer,
    }
}

/// App with neither a database nor a mailer
pub fn unconfigured_server() -> TestServer {
    TestServer::new(create_router(base_state(CorsConfig::default()))).unwrap()
}

/// A valid token for the test administrator
pub fn admin_token() -> String {
    token_issued_at(Utc::now())
}

pub fn token_issued_at(issued: DateTime<Utc>) -> String {
    TokenKeys::new(JWT_SECRET)
        .issue_at(
            &Principal {
                username: ADMIN_USERNAME.to_string(),
            },
            issued,
        )
        .unwrap()
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
