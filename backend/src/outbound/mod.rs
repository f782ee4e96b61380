//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed complaint store using Diesel ORM
//! - **mail**: SMTP notifier using lettre
//! - **memory**: in-process doubles for tests (`test-support` feature)
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod mail;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod persistence;
