//! Port for delivering notifications to complaint submitters.

use async_trait::async_trait;

use crate::domain::Notification;

use super::define_port_error;

define_port_error! {
    /// Errors raised by notifier adapters.
    pub enum NotifierError {
        /// Sender or recipient is not a usable mailbox.
        InvalidAddress { address: String, message: String } =>
            "invalid email address {address}: {message}",
        /// The transport refused or dropped the message.
        Transport { message: String } =>
            "notification transport failed: {message}",
        /// Delivery did not finish within the configured bound.
        Timeout { seconds: u64 } =>
            "notification delivery timed out after {seconds}s",
    }
}

/// Sends a plain-text notification to its single recipient.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError>;
}
