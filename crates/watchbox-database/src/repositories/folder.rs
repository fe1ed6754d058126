//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use watchbox_core::error::{AppError, ErrorKind};
use watchbox_core::result::AppResult;
use watchbox_core::traits::Repository;
use watchbox_entity::folder::{Folder, FolderRepository};

/// PostgreSQL-backed repository for folder CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PgFolderRepository {
    pool: PgPool,
}

impl PgFolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Folder, i64> for PgFolderRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND is_active = TRUE")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE is_active = TRUE ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn add(&self, entity: &Folder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, description, user_id, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.user_id)
        .bind(entity.is_active)
        .bind(entity.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_user_id_name_key") =>
            {
                AppError::conflict(format!("Folder '{}' already exists", entity.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    async fn update(&self, entity: &Folder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $2, \
                                description = $3, \
                                is_active = $4, \
                                updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.is_active)
        .bind(entity.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_user_id_name_key") =>
            {
                AppError::conflict(format!("Folder '{}' already exists", entity.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update folder", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Folder {} not found", entity.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl FolderRepository for PgFolderRepository {
    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE user_id = $1 AND is_active = TRUE ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list folders by user", e)
        })
    }

    async fn find_by_name_and_user_id(
        &self,
        name: &str,
        user_id: i64,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE name = $1 AND user_id = $2 AND is_active = TRUE",
        )
        .bind(name)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find folder by name", e)
        })
    }

    async fn is_name_unique_for_user(&self, name: &str, user_id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT NOT EXISTS ( \
                SELECT 1 FROM folders WHERE name = $1 AND user_id = $2 AND is_active = TRUE \
             )",
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to check folder name uniqueness",
                e,
            )
        })
    }
}
