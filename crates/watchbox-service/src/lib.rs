//! # watchbox-service
//!
//! Business logic service layer for WatchBox. Each service orchestrates
//! repositories obtained from the unit of work to implement
//! application-level use cases, reporting results as
//! [`watchbox_core::Outcome`] values.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod folder;
pub mod password;
pub mod user;

pub use folder::FolderService;
pub use password::PasswordHasher;
pub use user::UserService;
