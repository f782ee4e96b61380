//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ComplaintCommand, ComplaintQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub complaints: Arc<dyn ComplaintCommand>,
    pub complaints_query: Arc<dyn ComplaintQuery>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use complaints::domain::ports::{FixtureComplaintCommand, FixtureComplaintQuery};
    /// use complaints::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureComplaintCommand),
    ///     Arc::new(FixtureComplaintQuery),
    /// );
    /// let _command = state.complaints.clone();
    /// ```
    pub fn new(
        complaints: Arc<dyn ComplaintCommand>,
        complaints_query: Arc<dyn ComplaintQuery>,
    ) -> Self {
        Self {
            complaints,
            complaints_query,
        }
    }
}
