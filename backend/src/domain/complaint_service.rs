//! Complaint domain service.
//!
//! Implements the driving ports by composing the ticket generator, the
//! complaint store, and the notifier. Store mutations commit before the
//! notification is attempted; a failed notification is reported, not rolled
//! back.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    CheckStatusRequest, CheckStatusResponse, ComplaintCommand, ComplaintQuery,
    ComplaintRepository, ComplaintRepositoryError, Notifier, NotifierError,
    ResolveComplaintRequest, ResolveComplaintResponse, SubmitComplaintRequest,
    SubmitComplaintResponse, TicketGenerator,
};
use crate::domain::{
    Complaint, ComplaintDraft, ComplaintValidationError, Error, Notification, TicketNumber,
};

/// Message returned when resolving an unknown ticket.
pub const COMPLAINT_NOT_FOUND: &str = "Complaint not found";
/// Message returned when checking the status of an unknown ticket.
pub const TICKET_NOT_FOUND: &str = "Ticket not found";
/// Ticket draws attempted before a submission gives up on collisions.
pub const MAX_TICKET_ATTEMPTS: u32 = 5;

fn map_repository_error(error: ComplaintRepositoryError) -> Error {
    match error {
        ComplaintRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("complaint store unavailable: {message}"))
        }
        ComplaintRepositoryError::Query { message } => {
            Error::internal(format!("complaint store error: {message}"))
        }
        ComplaintRepositoryError::DuplicateTicket { ticket_number } => {
            Error::conflict(format!("ticket number {ticket_number} is already in use"))
                .with_details(json!({ "code": "duplicate_ticket" }))
        }
        ComplaintRepositoryError::Validation { message } => {
            Error::invalid_request(format!("complaint rejected: {message}"))
        }
    }
}

fn map_validation_error(error: &ComplaintValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

fn map_notifier_error(error: &NotifierError, ticket_number: &TicketNumber) -> Error {
    Error::notification_failed(format!(
        "complaint {ticket_number} was saved but the notification email could not be sent"
    ))
    .with_details(json!({
        "ticketNumber": ticket_number.as_str(),
        "code": "notification_failed",
        "reason": error.to_string(),
    }))
}

/// Complaint service implementing [`ComplaintCommand`] and [`ComplaintQuery`].
#[derive(Clone)]
pub struct ComplaintService<R, N, G> {
    complaints: Arc<R>,
    notifier: Arc<N>,
    tickets: Arc<G>,
}

impl<R, N, G> ComplaintService<R, N, G> {
    /// Create a service over the given store, notifier, and ticket source.
    pub fn new(complaints: Arc<R>, notifier: Arc<N>, tickets: Arc<G>) -> Self {
        Self {
            complaints,
            notifier,
            tickets,
        }
    }
}

impl<R, N, G> ComplaintService<R, N, G>
where
    R: ComplaintRepository,
    N: Notifier,
    G: TicketGenerator,
{
    /// Insert under a fresh ticket, drawing again whenever the store reports
    /// the ticket as taken.
    async fn create_with_fresh_ticket(&self, draft: &ComplaintDraft) -> Result<Complaint, Error> {
        for attempt in 1..=MAX_TICKET_ATTEMPTS {
            let ticket_number = self.tickets.generate();
            match self.complaints.create(draft, &ticket_number).await {
                Ok(complaint) => return Ok(complaint),
                Err(ComplaintRepositoryError::DuplicateTicket { .. }) => {
                    warn!(
                        attempt,
                        ticket_number = %ticket_number,
                        "ticket number collision; drawing another"
                    );
                }
                Err(other) => return Err(map_repository_error(other)),
            }
        }

        Err(
            Error::conflict("could not allocate a unique ticket number").with_details(json!({
                "code": "ticket_collision",
                "attempts": MAX_TICKET_ATTEMPTS,
            })),
        )
    }

    async fn notify(
        &self,
        notification: &Notification,
        ticket_number: &TicketNumber,
    ) -> Result<(), Error> {
        self.notifier.send(notification).await.map_err(|err| {
            error!(
                ticket_number = %ticket_number,
                error_kind = err.kind(),
                error = %err,
                subject = notification.subject(),
                "notification failed after the complaint was committed"
            );
            map_notifier_error(&err, ticket_number)
        })
    }
}

#[async_trait]
impl<R, N, G> ComplaintCommand for ComplaintService<R, N, G>
where
    R: ComplaintRepository,
    N: Notifier,
    G: TicketGenerator,
{
    async fn submit(
        &self,
        request: SubmitComplaintRequest,
    ) -> Result<SubmitComplaintResponse, Error> {
        let draft = ComplaintDraft::try_new(request.email, request.complaint)
            .map_err(|err| map_validation_error(&err))?;

        let complaint = self.create_with_fresh_ticket(&draft).await?;
        let ticket_number = complaint.ticket_number().clone();
        info!(ticket_number = %ticket_number, id = complaint.id(), "complaint submitted");

        let receipt = Notification::complaint_received(complaint.email(), &ticket_number);
        self.notify(&receipt, &ticket_number).await?;

        Ok(SubmitComplaintResponse { ticket_number })
    }

    async fn resolve(
        &self,
        request: ResolveComplaintRequest,
    ) -> Result<ResolveComplaintResponse, Error> {
        let complaint = self
            .complaints
            .mark_resolved(&request.ticket_number)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(COMPLAINT_NOT_FOUND))?;
        let ticket_number = complaint.ticket_number().clone();
        info!(ticket_number = %ticket_number, "complaint resolved");

        let notice = Notification::complaint_resolved(complaint.email(), &ticket_number);
        self.notify(&notice, &ticket_number).await?;

        Ok(ResolveComplaintResponse {
            ticket_number,
            status: complaint.status(),
        })
    }
}

#[async_trait]
impl<R, N, G> ComplaintQuery for ComplaintService<R, N, G>
where
    R: ComplaintRepository,
    N: Send + Sync,
    G: Send + Sync,
{
    async fn check_status(
        &self,
        request: CheckStatusRequest,
    ) -> Result<CheckStatusResponse, Error> {
        let complaint = self
            .complaints
            .find_by_ticket(&request.ticket_number)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(TICKET_NOT_FOUND))?;

        Ok(CheckStatusResponse {
            ticket_number: complaint.ticket_number().clone(),
            status: complaint.status(),
        })
    }
}

#[cfg(test)]
#[path = "complaint_service_tests.rs"]
mod tests;
