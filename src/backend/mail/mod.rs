//! Outbound Mail
//!
//! - **`smtp`** - `SmtpMailer`, the lettre-based SMTP transport
//! - **`handlers`** - `/api/sendEmail` and `/api/sendBulkEmail`
//!
//! Handlers send through the `Mailer` trait. Every message is sent from the
//! configured sender address. Failures are never retried.

use async_trait::async_trait;
use thiserror::Error;

/// lettre SMTP transport
pub mod smtp;

/// HTTP handlers for mail endpoints
pub mod handlers;

pub use handlers::{send_bulk_email, send_email};
pub use smtp::SmtpMailer;

/// A message to send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
}

/// Mail delivery failures
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sender address used as `From`
    fn sender(&self) -> &str;

    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
