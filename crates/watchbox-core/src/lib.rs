//! # watchbox-core
//!
//! Core crate for WatchBox. Contains configuration schemas, the generic
//! repository trait, the operation outcome type, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other WatchBox crates.

pub mod config;
pub mod error;
pub mod outcome;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use outcome::{FailureKind, Outcome};
pub use result::AppResult;
