//! Complaint record and its status state machine.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TicketNumber;

/// Maximum stored length of a submitter email address.
pub const EMAIL_MAX: usize = 100;

/// Lifecycle state of a complaint.
///
/// The only transition is `Pending -> Resolved`. Resolving an already
/// resolved complaint is allowed and leaves it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    /// Submitted, awaiting resolution.
    #[default]
    Pending,
    /// Terminal state.
    Resolved,
}

impl ComplaintStatus {
    /// Status after a resolve operation.
    #[must_use]
    pub const fn resolve(self) -> Self {
        Self::Resolved
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Stored and displayed representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown complaint status: {value}")]
pub struct UnknownComplaintStatus {
    pub value: String,
}

impl FromStr for ComplaintStatus {
    type Err = UnknownComplaintStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            other => Err(UnknownComplaintStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// Validation errors for a complaint submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplaintValidationError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    #[error("complaint must not be empty")]
    EmptyComplaint,
    #[error("{field} must not contain NUL characters")]
    InvalidCharacter { field: &'static str },
}

impl ComplaintValidationError {
    /// Request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail | Self::EmailTooLong { .. } => "email",
            Self::EmptyComplaint => "complaint",
            Self::InvalidCharacter { field } => *field,
        }
    }

    /// Machine-readable detail code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyEmail | Self::EmptyComplaint => "empty_field",
            Self::EmailTooLong { .. } => "too_long",
            Self::InvalidCharacter { .. } => "invalid_character",
        }
    }
}

/// Validated complaint submission, not yet assigned a ticket.
///
/// # Examples
/// ```
/// use complaints::domain::ComplaintDraft;
///
/// let draft = ComplaintDraft::try_new("a@x.com", "broken widget").expect("valid");
/// assert_eq!(draft.email(), "a@x.com");
/// assert!(ComplaintDraft::try_new("a@x.com", "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    email: String,
    body: String,
}

impl ComplaintDraft {
    /// Validate a submission. Both fields are free-form but must not be blank
    /// and must not contain NUL, which PostgreSQL text columns reject.
    pub fn try_new(
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ComplaintValidationError> {
        let email = email.into();
        let body = body.into();
        if email.trim().is_empty() {
            return Err(ComplaintValidationError::EmptyEmail);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(ComplaintValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if body.trim().is_empty() {
            return Err(ComplaintValidationError::EmptyComplaint);
        }
        for (field, value) in [("email", &email), ("complaint", &body)] {
            if value.contains('\0') {
                return Err(ComplaintValidationError::InvalidCharacter { field });
            }
        }
        Ok(Self { email, body })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Persisted complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    id: i64,
    email: String,
    body: String,
    ticket_number: TicketNumber,
    status: ComplaintStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Field bundle used by store adapters to rebuild a [`Complaint`].
#[derive(Debug, Clone)]
pub struct ComplaintParts {
    pub id: i64,
    pub email: String,
    pub body: String,
    pub ticket_number: TicketNumber,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Rebuild a complaint from stored fields.
    #[must_use]
    pub fn from_parts(parts: ComplaintParts) -> Self {
        let ComplaintParts {
            id,
            email,
            body,
            ticket_number,
            status,
            created_at,
            updated_at,
        } = parts;
        Self {
            id,
            email,
            body,
            ticket_number,
            status,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned surrogate key.
    pub const fn id(&self) -> i64 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub const fn ticket_number(&self) -> &TicketNumber {
        &self.ticket_number
    }

    pub const fn status(&self) -> ComplaintStatus {
        self.status
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply the resolve transition in place.
    pub fn resolve(&mut self, at: DateTime<Utc>) {
        self.status = self.status.resolve();
        self.updated_at = at;
    }
}
