//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`login`** - POST /api/login - Administrator login, returns a bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use waitlist::backend::auth::handlers::login;
//! use waitlist::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/api/login", post(login))
//!     .with_state(state);
//! # }
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

pub use login::login;
