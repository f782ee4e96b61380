//! Email notifications sent to complaint submitters.

use super::TicketNumber;

/// Subject of the receipt email.
pub const RECEIVED_SUBJECT: &str = "Complaint Received";
/// Subject of the resolution email.
pub const RESOLVED_SUBJECT: &str = "Complaint Resolved";

/// Plain-text email addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    recipient: String,
    subject: String,
    body: String,
}

impl Notification {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Receipt confirmation carrying the freshly issued ticket.
    ///
    /// # Examples
    /// ```
    /// use complaints::domain::{Notification, TicketNumber};
    ///
    /// let ticket = TicketNumber::new("AB12CD").expect("valid");
    /// let mail = Notification::complaint_received("a@x.com", &ticket);
    /// assert_eq!(mail.subject(), "Complaint Received");
    /// assert!(mail.body().contains("AB12CD"));
    /// ```
    pub fn complaint_received(recipient: impl Into<String>, ticket: &TicketNumber) -> Self {
        Self::new(
            recipient,
            RECEIVED_SUBJECT,
            format!("Your complaint has been received.\nTicket Number: {ticket}"),
        )
    }

    /// Resolution notice for `ticket`.
    pub fn complaint_resolved(recipient: impl Into<String>, ticket: &TicketNumber) -> Self {
        Self::new(
            recipient,
            RESOLVED_SUBJECT,
            format!("Your complaint with Ticket Number {ticket} has been resolved."),
        )
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
