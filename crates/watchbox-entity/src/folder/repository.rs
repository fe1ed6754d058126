//! Folder repository port.

use async_trait::async_trait;

use watchbox_core::result::AppResult;
use watchbox_core::traits::Repository;

use super::model::Folder;

/// Data-access contract for folders.
///
/// Reads see active folders only. Name uniqueness is scoped to a single
/// user's active folders.
#[async_trait]
pub trait FolderRepository: Repository<Folder, i64> {
    /// List a user's active folders.
    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Folder>>;

    /// Find a user's active folder by exact name.
    async fn find_by_name_and_user_id(
        &self,
        name: &str,
        user_id: i64,
    ) -> AppResult<Option<Folder>>;

    /// Whether the user has no active folder with the given name.
    async fn is_name_unique_for_user(&self, name: &str, user_id: i64) -> AppResult<bool>;
}
