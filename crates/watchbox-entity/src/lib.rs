//! # watchbox-entity
//!
//! Domain entity models and persistence ports for WatchBox. Every model
//! struct represents a database table row; entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and `sqlx::FromRow`. The ports
//! (per-entity repository traits and the unit-of-work trait) are the
//! contracts the database adapters implement.

pub mod folder;
pub mod unit_of_work;
pub mod user;

pub use unit_of_work::UnitOfWork;
