//! # watchbox-database
//!
//! PostgreSQL connection management and concrete repository and
//! unit-of-work implementations for WatchBox, plus in-memory adapters
//! with the same semantics for tests.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod unit_of_work;

pub use connection::DatabasePool;
pub use unit_of_work::PgUnitOfWork;
