//! Common test utilities and helpers
//!
//! - In-memory stand-ins for the signup store and the mailer
//! - Test server construction and token helpers
//! - Error body assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod fakes;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use auth_helpers::*;
#[allow(unused_imports)]
pub use fakes::*;
