//! Authentication Module
//!
//! The service has exactly one principal, the administrator. This module
//! verifies the administrator's login, issues short-lived JWT bearer tokens
//! and defines the errors shared by login and token checks.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and `AuthError`
//! ├── credentials.rs  - Administrator credential check
//! ├── sessions.rs     - JWT issuing and verification
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     └── login.rs    - POST /api/login
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username and password → `AdminCredentials::verify` →
//!    `TokenKeys::issue` → `{ "token": ... }`
//! 2. **Protected request**: `Authorization: Bearer <token>` →
//!    `middleware::auth::authenticate` → claims attached to the request
//!
//! # Security
//!
//! - Tokens are HS256 JWTs signed with `JWT_SECRET`
//! - Tokens expire one hour after issuance, with no leeway
//! - Nothing is stored server-side, so tokens cannot be revoked
//! - Invalid credentials return 401 without saying which half was wrong

use axum::http::StatusCode;
use thiserror::Error;

/// Administrator credential check
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{AdminCredentials, Principal};
pub use sessions::{Claims, TokenKeys, TOKEN_VALIDITY_SECS};
pub use handlers::login;
pub use handlers::types::{LoginRequest, TokenResponse};

/// Login and token failures
///
/// Display strings are the client-facing messages.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password absent or empty
    #[error("Missing credentials")]
    MissingCredentials,

    /// Username/password pair does not match the administrator
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No `Authorization` header on a protected request
    #[error("Unauthorized - No token provided")]
    Unauthorized,

    /// Token malformed, wrongly signed or expired
    #[error("Forbidden - Invalid token")]
    Forbidden,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}
