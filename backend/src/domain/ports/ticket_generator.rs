//! Port for ticket number generation.

use crate::domain::TicketNumber;

/// Source of candidate ticket numbers.
///
/// Implementations draw freely; they do not consult the store. Uniqueness is
/// established by the store's create operation.
#[cfg_attr(test, mockall::automock)]
pub trait TicketGenerator: Send + Sync {
    fn generate(&self) -> TicketNumber;
}
