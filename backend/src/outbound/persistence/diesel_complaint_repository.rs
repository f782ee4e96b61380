//! PostgreSQL-backed `ComplaintRepository` using Diesel.
//!
//! Ticket uniqueness rests on the `complaints_ticket_number_key` constraint:
//! an insert that collides fails with a unique violation, which is reported
//! as [`ComplaintRepositoryError::DuplicateTicket`] so the service can draw
//! another ticket.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{
    Complaint, ComplaintDraft, ComplaintParts, ComplaintStatus, TicketNumber,
};

use super::models::{ComplaintRow, ComplaintStatusUpdate, NewComplaintRow};
use super::pool::{DbPool, PoolError};
use super::schema::complaints;

/// Diesel implementation of the complaint store.
#[derive(Clone)]
pub struct DieselComplaintRepository {
    pool: DbPool,
}

impl DieselComplaintRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ComplaintRepositoryError {
    ComplaintRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: DieselError) -> ComplaintRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ComplaintRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation,
            _,
        ) => ComplaintRepositoryError::validation("complaint violates a table constraint"),
        DieselError::QueryBuilderError(_) => {
            ComplaintRepositoryError::query("database query error")
        }
        _ => ComplaintRepositoryError::query("database error"),
    }
}

fn map_insert_error(error: DieselError, ticket_number: &TicketNumber) -> ComplaintRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ComplaintRepositoryError::duplicate_ticket(ticket_number.as_str())
        }
        other => map_diesel_error(other),
    }
}

/// Convert a row into the domain record, rejecting values the domain cannot
/// represent.
fn row_to_complaint(row: ComplaintRow) -> Result<Complaint, ComplaintRepositoryError> {
    let ticket_number = TicketNumber::new(row.ticket_number).map_err(|err| {
        ComplaintRepositoryError::query(format!("stored ticket number is malformed: {err}"))
    })?;
    let status = row
        .status
        .parse::<ComplaintStatus>()
        .map_err(|err| ComplaintRepositoryError::query(err.to_string()))?;

    Ok(Complaint::from_parts(ComplaintParts {
        id: row.id,
        email: row.email,
        body: row.complaint,
        ticket_number,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

#[async_trait]
impl ComplaintRepository for DieselComplaintRepository {
    async fn create(
        &self,
        draft: &ComplaintDraft,
        ticket_number: &TicketNumber,
    ) -> Result<Complaint, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(complaints::table)
            .values(&NewComplaintRow {
                email: draft.email(),
                complaint: draft.body(),
                ticket_number: ticket_number.as_str(),
            })
            .returning(ComplaintRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, ticket_number))?;

        row_to_complaint(row)
    }

    async fn find_by_ticket(
        &self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ComplaintRow> = complaints::table
            .filter(complaints::ticket_number.eq(ticket_number.as_str()))
            .select(ComplaintRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_complaint).transpose()
    }

    async fn mark_resolved(
        &self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ComplaintRow> = diesel::update(
            complaints::table.filter(complaints::ticket_number.eq(ticket_number.as_str())),
        )
        .set(&ComplaintStatusUpdate {
            status: ComplaintStatus::Resolved.as_str(),
            updated_at: Utc::now(),
        })
        .returning(ComplaintRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        row.map(row_to_complaint).transpose()
    }
}
