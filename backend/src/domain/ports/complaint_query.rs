//! Driving port for read-only complaint lookups.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ComplaintStatus, Error, TicketNumber};

/// Request for the current status of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatusRequest {
    pub ticket_number: TicketNumber,
}

/// Current status of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatusResponse {
    pub ticket_number: TicketNumber,
    pub status: ComplaintStatus,
}

/// Driving port for complaint reads. Never mutates the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintQuery: Send + Sync {
    /// Look up the status of `request.ticket_number`; not-found when absent.
    async fn check_status(&self, request: CheckStatusRequest)
    -> Result<CheckStatusResponse, Error>;
}

/// Canned query reporting every ticket as `pending`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComplaintQuery;

#[async_trait]
impl ComplaintQuery for FixtureComplaintQuery {
    async fn check_status(
        &self,
        request: CheckStatusRequest,
    ) -> Result<CheckStatusResponse, Error> {
        Ok(CheckStatusResponse {
            ticket_number: request.ticket_number,
            status: ComplaintStatus::Pending,
        })
    }
}
