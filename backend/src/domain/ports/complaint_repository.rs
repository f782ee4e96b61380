//! Port for the complaint store.
//!
//! The store owns every complaint record. It is keyed by ticket number and
//! enforces ticket uniqueness itself: a create that would reuse an existing
//! ticket fails with [`ComplaintRepositoryError::DuplicateTicket`] and leaves
//! the store unchanged. All writes are committed before the call returns.

use async_trait::async_trait;

use crate::domain::{Complaint, ComplaintDraft, TicketNumber};

use super::define_port_error;

define_port_error! {
    /// Errors raised by complaint store adapters.
    pub enum ComplaintRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "complaint store connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } =>
            "complaint store query failed: {message}",
        /// Another record already holds this ticket number.
        DuplicateTicket { ticket_number: String } =>
            "ticket number {ticket_number} is already in use",
        /// The record was rejected by a store-side constraint.
        Validation { message: String } =>
            "complaint rejected by store: {message}",
    }
}

/// Durable keyed storage over complaint records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Insert a new `pending` complaint under `ticket_number`.
    async fn create(
        &self,
        draft: &ComplaintDraft,
        ticket_number: &TicketNumber,
    ) -> Result<Complaint, ComplaintRepositoryError>;

    /// Exact-match lookup. Returns `None` when no record holds the ticket.
    async fn find_by_ticket(
        &self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError>;

    /// Set the status to `resolved` and persist.
    ///
    /// Returns `None` when no record holds the ticket. Resolving an already
    /// resolved complaint succeeds and returns it unchanged apart from its
    /// modification time.
    async fn mark_resolved(
        &self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn duplicate_ticket_error_names_the_ticket() {
        let err = ComplaintRepositoryError::duplicate_ticket("AB12CD");
        assert_eq!(err.to_string(), "ticket number AB12CD is already in use");
        assert_eq!(err.kind(), "DuplicateTicket");
    }

    #[rstest]
    fn connection_error_carries_message() {
        let err = ComplaintRepositoryError::connection("pool timed out");
        assert!(err.to_string().contains("pool timed out"));
    }
}
