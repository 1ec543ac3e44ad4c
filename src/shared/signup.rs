/**
 * Waitlist Signup Records
 *
 * `Signup` is a stored row of the `emails` table. `NewSignup` is a validated
 * insert built from a public `POST /api/subscribe` body.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A waitlist entry as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    /// Row ID
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique email address
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A validated signup ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewSignup {
    /// Validate raw request fields
    ///
    /// All three fields must be non-blank and the email must contain `@`.
    /// Surrounding whitespace is trimmed.
    pub fn parse(
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, SharedError> {
        let first_name = required("firstName", first_name)?;
        let last_name = required("lastName", last_name)?;
        let email = required("email", email)?;

        if !email.contains('@') {
            return Err(SharedError::validation("email", "must contain '@'"));
        }

        Ok(Self {
            first_name,
            last_name,
            email,
        })
    }
}

fn required(field: &str, value: Option<&str>) -> Result<String, SharedError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(SharedError::missing(field)),
    }
}
