//! Internal Diesel row structs. Never exposed outside the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::complaints;

/// Row read from the complaints table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = complaints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ComplaintRow {
    pub id: i64,
    pub email: String,
    pub complaint: String,
    pub ticket_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable complaint; `status` and timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaints)]
pub(crate) struct NewComplaintRow<'a> {
    pub email: &'a str,
    pub complaint: &'a str,
    pub ticket_number: &'a str,
}

/// Changeset applied by the resolve transition.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = complaints)]
pub(crate) struct ComplaintStatusUpdate<'a> {
    pub status: &'a str,
    pub updated_at: DateTime<Utc>,
}
