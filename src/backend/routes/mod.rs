//! Route Configuration Module
//!
//! - **`router`** - main router creation and global middleware
//! - **`api_routes`** - the `/api/*` endpoints and their access rules
//!
//! # Middleware Order
//!
//! Outermost first:
//!
//! 1. `TraceLayer` - request/response spans
//! 2. `admit_origin` - CORS headers, answers every `OPTIONS` with 200
//! 3. `require_admin` - only on protected method routes
//! 4. handler

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
