//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! internal; callers only see the domain `ComplaintRepository` port.
//!
//! ```ignore
//! use complaints::outbound::persistence::{DbPool, DieselComplaintRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/complaints")).await?;
//! let repo = DieselComplaintRepository::new(pool);
//! ```

mod diesel_complaint_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_complaint_repository::DieselComplaintRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
