//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`ComplaintRepository`, `Notifier`, `TicketGenerator`) are
//! implemented by outbound adapters. Driving ports (`ComplaintCommand`,
//! `ComplaintQuery`) are implemented by the domain service and called by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod complaint_command;
mod complaint_query;
mod complaint_repository;
mod notifier;
mod ticket_generator;

#[cfg(test)]
pub use complaint_command::MockComplaintCommand;
pub use complaint_command::{
    ComplaintCommand, FIXTURE_TICKET, FixtureComplaintCommand, ResolveComplaintRequest,
    ResolveComplaintResponse, SubmitComplaintRequest, SubmitComplaintResponse,
};
#[cfg(test)]
pub use complaint_query::MockComplaintQuery;
pub use complaint_query::{
    CheckStatusRequest, CheckStatusResponse, ComplaintQuery, FixtureComplaintQuery,
};
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{ComplaintRepository, ComplaintRepositoryError};
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{Notifier, NotifierError};
#[cfg(test)]
pub use ticket_generator::MockTicketGenerator;
pub use ticket_generator::TicketGenerator;
