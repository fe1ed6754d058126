//! Unit-of-work port.

use std::sync::Arc;

use async_trait::async_trait;

use watchbox_core::result::AppResult;

use crate::folder::FolderRepository;
use crate::user::UserRepository;

/// Session-scoped broker for repositories and transaction boundaries.
///
/// Implementations construct one repository instance per repository type,
/// lazily, and cache it for the lifetime of the unit of work. Every
/// repository type must be registered. Dropping the unit of work releases
/// any open transaction without committing it.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// The user repository for this session.
    fn users(&self) -> Arc<dyn UserRepository>;

    /// The folder repository for this session.
    fn folders(&self) -> Arc<dyn FolderRepository>;

    /// Flush pending work: commits the open transaction if one exists,
    /// otherwise a no-op (statements execute eagerly).
    async fn save_changes(&self) -> AppResult<()>;

    /// Open an explicit transaction for a multi-step operation.
    async fn begin_transaction(&self) -> AppResult<()>;

    /// Commit the open transaction, if any.
    async fn commit_transaction(&self) -> AppResult<()>;

    /// Roll back the open transaction, if any.
    async fn rollback_transaction(&self) -> AppResult<()>;
}
