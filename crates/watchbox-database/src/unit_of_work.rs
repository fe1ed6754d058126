//! PostgreSQL unit-of-work implementation.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

use watchbox_core::error::{AppError, ErrorKind};
use watchbox_core::result::AppResult;
use watchbox_entity::folder::FolderRepository;
use watchbox_entity::unit_of_work::UnitOfWork;
use watchbox_entity::user::UserRepository;

use crate::repositories::{PgFolderRepository, PgUserRepository};

/// Session-scoped broker over a PostgreSQL pool.
///
/// Repository instances are constructed lazily, once per repository type,
/// and cached for the lifetime of the unit of work. Statements issued
/// through the repositories execute eagerly; the explicit transaction
/// methods manage a dedicated session transaction for multi-step call
/// sites. An open transaction that is never committed is rolled back when
/// the unit of work is dropped.
pub struct PgUnitOfWork {
    pool: PgPool,
    users: OnceLock<Arc<PgUserRepository>>,
    folders: OnceLock<Arc<PgFolderRepository>>,
    transaction: Mutex<Option<Transaction<'static, Postgres>>>,
}

impl PgUnitOfWork {
    /// Create a new unit of work over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            users: OnceLock::new(),
            folders: OnceLock::new(),
            transaction: Mutex::new(None),
        }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::clone(
            self.users
                .get_or_init(|| Arc::new(PgUserRepository::new(self.pool.clone()))),
        ) as Arc<dyn UserRepository>
    }

    fn folders(&self) -> Arc<dyn FolderRepository> {
        Arc::clone(
            self.folders
                .get_or_init(|| Arc::new(PgFolderRepository::new(self.pool.clone()))),
        ) as Arc<dyn FolderRepository>
    }

    async fn save_changes(&self) -> AppResult<()> {
        let mut guard = self.transaction.lock().await;
        if let Some(tx) = guard.take() {
            tx.commit().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
            })?;
        }
        Ok(())
    }

    async fn begin_transaction(&self) -> AppResult<()> {
        let mut guard = self.transaction.lock().await;
        if guard.is_some() {
            return Err(AppError::database("A transaction is already in progress"));
        }
        let tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        *guard = Some(tx);
        Ok(())
    }

    async fn commit_transaction(&self) -> AppResult<()> {
        let mut guard = self.transaction.lock().await;
        if let Some(tx) = guard.take() {
            tx.commit().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
            })?;
        }
        Ok(())
    }

    async fn rollback_transaction(&self) -> AppResult<()> {
        let mut guard = self.transaction.lock().await;
        if let Some(tx) = guard.take() {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
        }
        Ok(())
    }
}
