/**
 * Authentication Handler Types
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// Both fields are optional on the wire so a missing field can be reported
/// as `400 Missing credentials` instead of a body rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT bearer token (1-hour expiration)
    pub token: String,
}
