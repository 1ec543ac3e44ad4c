//! In-memory collaborators
//!
//! Both record how often they were called so tests can assert that a
//! rejected request had no side effects.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use waitlist::backend::mail::{MailError, Mailer, OutgoingMail};
use waitlist::backend::signups::{SignupStore, StoreError};
use waitlist::shared::{NewSignup, Signup};

pub const SENDER: &str = "waitlist@example.com";

/// Signup store backed by a `Vec`
#[derive(Default)]
pub struct MemorySignupStore {
    rows: Mutex<Vec<Signup>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MemorySignupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_emails(emails: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut rows = store.rows.lock().unwrap();
            for (i, email) in emails.iter().enumerate() {
                rows.push(Signup {
                    id: i as i32 + 1,
                    first_name: "Test".to_string(),
                    last_name: format!("User{}", i + 1),
                    email: email.to_string(),
                    created_at: Utc::now(),
                });
            }
        }
        store
    }

    /// Number of store operations performed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn emails_snapshot(&self) -> Vec<String> {
        self.rows.lock().unwrap().iter().map(|row| row.email.clone()).collect()
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl SignupStore for MemorySignupStore {
    async fn insert(&self, signup: &NewSignup) -> Result<Signup, StoreError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.email == signup.email) {
            return Err(StoreError::Duplicate(signup.email.clone()));
        }
        let row = Signup {
            id: rows.len() as i32 + 1,
            first_name: signup.first_name.clone(),
            last_name: signup.last_name.clone(),
            email: signup.email.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Signup>, StoreError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn emails(&self) -> Result<Vec<String>, StoreError> {
        self.enter()?;
        Ok(self.emails_snapshot())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.email != email);
        Ok(rows.len() != before)
    }
}

/// Mailer that keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send attempts, failed ones included
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    fn sender(&self) -> &str {
        SENDER
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MailError::Build(lettre::error::Error::MissingTo));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}
