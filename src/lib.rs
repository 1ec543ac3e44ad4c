//! Waitlist - Main Library
//!
//! Backend for a product waitlist: visitors join the list, and a single
//! administrator logs in to review it, prune it and mail everyone on it.
//!
//! # Module Structure
//!
//! - **`shared`** - signup records, input validation and its error type
//! - **`backend`** - the Axum server: authentication, origin admission,
//!   signup persistence, outbound mail
//!
//! # Usage
//!
//! ```rust,no_run
//! use waitlist::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
