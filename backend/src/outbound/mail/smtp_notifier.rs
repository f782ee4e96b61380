//! `Notifier` adapter that sends plain-text mail through an SMTP relay.
//!
//! One transport is built at startup and shared by every request. Each send
//! is bounded by the configured timeout; an expired send is reported as
//! [`NotifierError::Timeout`] and the outcome at the relay is unknown.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::domain::Notification;
use crate::domain::ports::{Notifier, NotifierError};

/// Connection settings for [`SmtpNotifier`].
#[derive(Clone)]
pub struct SmtpNotifierConfig {
    pub host: String,
    pub port: u16,
    /// Upgrade the connection with STARTTLS.
    pub use_tls: bool,
    pub username: Option<String>,
    pub password: Option<Zeroizing<String>>,
    /// `From` address of every message.
    pub sender: String,
    pub timeout: Duration,
}

impl fmt::Debug for SmtpNotifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpNotifierConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("sender", &self.sender)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// SMTP-backed notifier.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    timeout: Duration,
}

impl SmtpNotifier {
    /// Build the transport and validate the sender address.
    ///
    /// No connection is opened until the first send.
    ///
    /// # Errors
    /// [`NotifierError::InvalidAddress`] for an unparsable sender and
    /// [`NotifierError::Transport`] when the relay cannot be configured.
    pub fn new(config: SmtpNotifierConfig) -> Result<Self, NotifierError> {
        let sender = parse_mailbox(&config.sender)?;

        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|err| NotifierError::transport(format!("SMTP relay error: {err}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        builder = builder.port(config.port).timeout(Some(config.timeout));

        if let (Some(username), Some(password)) = (config.username, config.password) {
            builder = builder.credentials(Credentials::new(username, password.to_string()));
        }

        Ok(Self {
            transport: builder.build(),
            sender,
            timeout: config.timeout,
        })
    }

    fn build_message(&self, notification: &Notification) -> Result<Message, NotifierError> {
        build_message(self.sender.clone(), notification)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifierError> {
    address
        .parse::<Mailbox>()
        .map_err(|err| NotifierError::invalid_address(address, err.to_string()))
}

fn build_message(sender: Mailbox, notification: &Notification) -> Result<Message, NotifierError> {
    Message::builder()
        .from(sender)
        .to(parse_mailbox(notification.recipient())?)
        .subject(notification.subject())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body().to_owned())
        .map_err(|err| NotifierError::transport(format!("failed to build email: {err}")))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        let message = self.build_message(notification)?;

        match tokio::time::timeout(self.timeout, self.transport.send(message)).await {
            Ok(Ok(response)) => {
                debug!(code = %response.code(), "notification accepted by relay");
                Ok(())
            }
            Ok(Err(err)) => {
                warn!(error = %err, "SMTP send failed");
                Err(NotifierError::transport(err.to_string()))
            }
            Err(_) => Err(NotifierError::timeout(self.timeout.as_secs())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TicketNumber;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> SmtpNotifierConfig {
        SmtpNotifierConfig {
            host: "localhost".to_owned(),
            port: 2525,
            use_tls: false,
            username: Some("mailer".to_owned()),
            password: Some(Zeroizing::new("hunter2".to_owned())),
            sender: "complaints@example.com".to_owned(),
            timeout: Duration::from_secs(3),
        }
    }

    #[rstest]
    fn debug_redacts_password(config: SmtpNotifierConfig) {
        let rendered = format!("{config:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }

    #[rstest]
    fn rejects_invalid_sender(mut config: SmtpNotifierConfig) {
        config.sender = "not an address".to_owned();
        let err = SmtpNotifier::new(config).err().expect("invalid sender");
        assert!(matches!(err, NotifierError::InvalidAddress { .. }));
    }

    #[rstest]
    fn builds_plain_text_message() {
        let ticket = TicketNumber::new("AB12CD").expect("valid ticket");
        let notification = Notification::complaint_received("a@x.com", &ticket);
        let sender = parse_mailbox("complaints@example.com").expect("valid sender");

        let message = build_message(sender, &notification).expect("message");
        let raw = String::from_utf8(message.formatted()).expect("utf-8");

        assert!(raw.contains("Subject: Complaint Received"));
        assert!(raw.contains("To: a@x.com"));
        assert!(raw.contains("Content-Type: text/plain"));
        assert!(raw.contains("Ticket Number: AB12CD"));
    }

    #[rstest]
    fn invalid_recipient_is_reported() {
        let notification = Notification::new("nobody", "Subject", "body");
        let sender = parse_mailbox("complaints@example.com").expect("valid sender");

        let err = build_message(sender, &notification).expect_err("invalid recipient");
        assert_eq!(err.kind(), "InvalidAddress");
        assert!(err.to_string().contains("nobody"));
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_relay_fails_without_panicking(mut config: SmtpNotifierConfig) {
        config.port = 1;
        config.timeout = Duration::from_secs(2);
        let notifier = SmtpNotifier::new(config).expect("notifier");
        let notification = Notification::new("a@x.com", "Subject", "body");

        let err = notifier.send(&notification).await.expect_err("no relay");
        assert!(matches!(
            err,
            NotifierError::Transport { .. } | NotifierError::Timeout { .. }
        ));
    }
}
