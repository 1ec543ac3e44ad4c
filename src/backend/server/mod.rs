//! Server Module
//!
//! Everything needed to turn a `ServerConfig` into a running Axum router.
//!
//! - **`config`** - environment loading into an immutable `ServerConfig`
//! - **`state`** - `AppState` and its `FromRef` projections
//! - **`init`** - collaborator wiring and app creation
//!
//! # Example
//!
//! ```rust,no_run
//! use waitlist::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
