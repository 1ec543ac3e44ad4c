//! Shared Module
//!
//! Types that cross the HTTP boundary: waitlist signup records and the
//! validation errors raised while building them from request bodies.
//!
//! Everything here is plain data. Nothing in this module performs I/O.

/// Waitlist signup records
pub mod signup;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use signup::{NewSignup, Signup};
pub use error::SharedError;
