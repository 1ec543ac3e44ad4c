//! Middleware Module
//!
//! Request processing that runs before handlers, outermost first:
//!
//! - **`cors`** - Origin admission and preflight handling, on every route
//! - **`auth`** - Bearer token check, on administrator routes only
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use waitlist::backend::middleware::{admit_origin, require_admin};
//! use waitlist::backend::server::state::AppState;
//!
//! # async fn list() {}
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/api/subscribe", get(list).route_layer(from_fn_with_state(state.clone(), require_admin)))
//!     .layer(from_fn_with_state(state.clone(), admit_origin))
//!     .with_state(state);
//! # }
//! ```

pub mod auth;
pub mod cors;

pub use auth::{authenticate, authorize, require_admin, AdminUser, AuthOutcome};
pub use cors::{admit_origin, AdmissionDecision, CorsConfig, OriginPolicy};
