//! Domain primitives, ports, and services.
//!
//! Purpose: model complaints and their tickets independently of HTTP,
//! PostgreSQL, or SMTP. Adapters translate to and from these types.
//!
//! Public surface:
//! - `Complaint`, `ComplaintDraft`, `ComplaintStatus`: the record and its
//!   `pending -> resolved` lifecycle.
//! - `TicketNumber`: six-symbol `A-Z0-9` identifier.
//! - `Notification`: receipt and resolution emails.
//! - `Error`, `ErrorCode`: transport-agnostic failure envelope.
//! - `ComplaintService`: implementation of the driving ports.

pub mod complaint;
pub mod complaint_service;
pub mod error;
pub mod notification;
pub mod ports;
pub mod ticket;
pub mod trace_id;

pub use self::complaint::{
    Complaint, ComplaintDraft, ComplaintParts, ComplaintStatus, ComplaintValidationError,
    EMAIL_MAX, UnknownComplaintStatus,
};
pub use self::complaint_service::{
    COMPLAINT_NOT_FOUND, ComplaintService, MAX_TICKET_ATTEMPTS, TICKET_NOT_FOUND,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::notification::{Notification, RECEIVED_SUBJECT, RESOLVED_SUBJECT};
pub use self::ticket::{
    RandomTicketGenerator, TICKET_ALPHABET, TICKET_LENGTH, TicketNumber,
    TicketNumberValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
