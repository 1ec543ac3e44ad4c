//! Backend Error Module
//!
//! Error types used by HTTP handlers and middleware.
//!
//! - **`types`** - `BackendError` and its constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Handlers log the underlying cause (database, mail, token signing) with
//! `tracing::error!` and return a `BackendError` carrying only a status code
//! and a short message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
