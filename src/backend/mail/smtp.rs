/**
 * SMTP Mailer
 *
 * Sends mail through an authenticated SMTP relay (Zoho by default) using
 * lettre's tokio transport.
 */

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::backend::mail::{MailError, Mailer, OutgoingMail};
use crate::backend::server::config::SmtpConfig;

/// lettre-backed `Mailer`
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(config.user.clone(), config.password.clone()))
            .build();

        Ok(Self {
            transport,
            from,
            from_address: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn sender(&self) -> &str {
        &self.from_address
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let message = build_message(self.from.clone(), mail)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

/// Build a MIME message
///
/// Both bodies → `multipart/alternative`; otherwise a single part of
/// whichever body was given (empty text if neither).
pub fn build_message(from: Mailbox, mail: OutgoingMail) -> Result<Message, MailError> {
    let mut builder = Message::builder().from(from).subject(mail.subject);
    for address in &mail.to {
        builder = builder.to(parse_mailbox(address)?);
    }
    for address in &mail.bcc {
        builder = builder.bcc(parse_mailbox(address)?);
    }

    let message = match (mail.text, mail.html) {
        (Some(text), Some(html)) => builder.multipart(MultiPart::alternative_plain_html(text, html))?,
        (None, Some(html)) => builder.header(ContentType::TEXT_HTML).body(html)?,
        (text, None) => builder
            .header(ContentType::TEXT_PLAIN)
            .body(text.unwrap_or_default())?,
    };

    Ok(message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.trim().parse::<Mailbox>().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
