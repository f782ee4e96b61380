//! Complaint ticketing backend.
//!
//! Hexagonal layout: `domain` holds the complaint model, ports and service;
//! `inbound` adapts HTTP onto the driving ports; `outbound` implements the
//! driven ports with PostgreSQL and SMTP.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
