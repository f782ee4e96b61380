//! Driving port for complaint mutations: submission and resolution.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ComplaintStatus, Error, TicketNumber};

/// Request to file a new complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComplaintRequest {
    pub email: String,
    pub complaint: String,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComplaintResponse {
    pub ticket_number: TicketNumber,
}

/// Request to mark a complaint resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveComplaintRequest {
    pub ticket_number: TicketNumber,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveComplaintResponse {
    pub ticket_number: TicketNumber,
    pub status: ComplaintStatus,
}

/// Driving port for complaint write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintCommand: Send + Sync {
    /// Issue a ticket, persist the complaint as `pending`, and email a
    /// receipt to the submitter.
    ///
    /// The record stays committed when the receipt cannot be sent; the error
    /// then carries the ticket number in its details.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use complaints::domain::ports::{ComplaintCommand, FixtureComplaintCommand, SubmitComplaintRequest};
    /// # async fn example() -> Result<(), complaints::domain::Error> {
    /// let response = FixtureComplaintCommand
    ///     .submit(SubmitComplaintRequest {
    ///         email: "a@x.com".to_owned(),
    ///         complaint: "broken widget".to_owned(),
    ///     })
    ///     .await?;
    /// assert_eq!(response.ticket_number.as_str().len(), 6);
    /// # Ok(())
    /// # }
    /// ```
    async fn submit(&self, request: SubmitComplaintRequest)
    -> Result<SubmitComplaintResponse, Error>;

    /// Transition the complaint to `resolved` and email the submitter.
    ///
    /// Unknown tickets fail with a not-found error and have no side effect.
    async fn resolve(
        &self,
        request: ResolveComplaintRequest,
    ) -> Result<ResolveComplaintResponse, Error>;
}

/// Canned command used by adapter tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintCommand;

/// Ticket returned by [`FixtureComplaintCommand::submit`].
pub const FIXTURE_TICKET: &str = "FX0001";

#[async_trait]
impl ComplaintCommand for FixtureComplaintCommand {
    async fn submit(
        &self,
        _request: SubmitComplaintRequest,
    ) -> Result<SubmitComplaintResponse, Error> {
        let ticket_number = TicketNumber::new(FIXTURE_TICKET)
            .map_err(|err| Error::internal(format!("fixture ticket invalid: {err}")))?;
        Ok(SubmitComplaintResponse { ticket_number })
    }

    async fn resolve(
        &self,
        request: ResolveComplaintRequest,
    ) -> Result<ResolveComplaintResponse, Error> {
        Ok(ResolveComplaintResponse {
            ticket_number: request.ticket_number,
            status: ComplaintStatus::Resolved,
        })
    }
}
