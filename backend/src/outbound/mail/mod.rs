//! Outbound email delivery over SMTP.

mod smtp_notifier;

pub use smtp_notifier::{SmtpNotifier, SmtpNotifierConfig};
