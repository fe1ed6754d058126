//! Repository implementations for all WatchBox entities.

pub mod folder;
pub mod memory;
pub mod user;

pub use folder::PgFolderRepository;
pub use memory::{MemoryFolderRepository, MemoryUnitOfWork, MemoryUserRepository};
pub use user::PgUserRepository;
