/**
 * Administrator Credentials
 *
 * The administrator's username and password are configured out of band
 * (`ADMIN_USERNAME` / `ADMIN_PASSWORD`) and compared verbatim. There is one
 * static pair, so nothing is hashed or looked up.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backend::auth::AuthError;

/// The identity a successful login resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
}

/// The single configured administrator identity
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a submitted username/password pair
    ///
    /// # Errors
    ///
    /// * `MissingCredentials` - either field is absent or empty
    /// * `InvalidCredentials` - the pair does not exactly match
    pub fn verify(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Principal, AuthError> {
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => return Err(AuthError::MissingCredentials),
        };

        // Both comparisons are always evaluated.
        let username_ok = username == self.username;
        let password_ok = password == self.password;
        if !(username_ok & password_ok) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Principal {
            username: username.to_string(),
        })
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminCredentials {
        AdminCredentials::new("admin", "hunter2")
    }

    #[test]
    fn test_verify_success() {
        let principal = admin().verify(Some("admin"), Some("hunter2")).unwrap();
        assert_eq!(principal.username, "admin");
    }

    #[test]
    fn test_verify_missing_fields() {
        assert_eq!(admin().verify(None, Some("hunter2")), Err(AuthError::MissingCredentials));
        assert_eq!(admin().verify(Some("admin"), None), Err(AuthError::MissingCredentials));
        assert_eq!(admin().verify(Some(""), Some("hunter2")), Err(AuthError::MissingCredentials));
        assert_eq!(admin().verify(Some("admin"), Some("")), Err(AuthError::MissingCredentials));
    }

    #[test]
    fn test_verify_wrong_password() {
        assert_eq!(admin().verify(Some("admin"), Some("hunter3")), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        assert_eq!(admin().verify(Some("Admin"), Some("hunter2")), Err(AuthError::InvalidCredentials));
        assert_eq!(admin().verify(Some("admin"), Some("HUNTER2")), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", admin());
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
