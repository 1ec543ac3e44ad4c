//! Waitlist Signups
//!
//! - **`db`** - `SignupStore` trait and its PostgreSQL implementation
//! - **`handlers`** - `/api/subscribe` handlers
//!
//! `POST /api/subscribe` is public. Listing and deleting signups require an
//! administrator token.

/// Signup persistence
pub mod db;

/// HTTP handlers for /api/subscribe
pub mod handlers;

pub use db::{PgSignupStore, SignupStore, StoreError};
pub use handlers::{delete_signup, list_signups, subscribe};
