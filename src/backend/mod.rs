//! Backend Module
//!
//! The Axum HTTP server behind the waitlist.
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route table and global middleware
//! - **`auth`** - administrator login and session tokens
//! - **`middleware`** - origin admission and token checks
//! - **`signups`** - waitlist persistence and handlers
//! - **`mail`** - SMTP delivery and mail handlers
//! - **`error`** - `BackendError` and its JSON rendering
//!
//! # Request Flow
//!
//! Every request passes origin admission first. `OPTIONS` ends there. Requests
//! to protected routes then pass the token check, which ends the request with
//! 401 or 403 before the handler or any collaborator is touched.
//!
//! Every error body has the shape `{"error": "...", "status": <code>}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Administrator authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Waitlist signups
pub mod signups;

/// Outbound mail
pub mod mail;

pub use error::BackendError;
pub use server::create_app;
