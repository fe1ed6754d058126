//! Folder CRUD orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use watchbox_core::outcome::Outcome;
use watchbox_core::result::AppResult;
use watchbox_core::traits::Repository;
use watchbox_entity::folder::{Folder, FolderRepository};
use watchbox_entity::unit_of_work::UnitOfWork;
use watchbox_entity::user::UserRepository;

/// Handles folder CRUD operations.
///
/// Every folder belongs to a user; creation and per-user listing verify
/// the owner exists before touching folders.
#[derive(Clone)]
pub struct FolderService {
    /// Unit of work brokering repositories and persistence.
    uow: Arc<dyn UnitOfWork>,
    /// Folder repository, obtained from the unit of work.
    folders: Arc<dyn FolderRepository>,
    /// User repository, for owner existence checks.
    users: Arc<dyn UserRepository>,
}

/// Data for creating a folder.
#[derive(Debug, Clone)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// The owning user.
    pub user_id: i64,
}

/// Data for a partial folder update. Absent fields mean "no change".
#[derive(Debug, Clone, Default)]
pub struct UpdateFolderRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Outward-facing representation of a folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderView {
    /// Folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// The owning user.
    pub user_id: i64,
    /// Whether the folder is active.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Folder> for FolderView {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            description: folder.description,
            user_id: folder.user_id,
            is_active: folder.is_active,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
        }
    }
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self {
            folders: uow.folders(),
            users: uow.users(),
            uow,
        }
    }

    /// Gets an active folder by ID.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Outcome<FolderView>> {
        match self.folders.find_by_id(id).await? {
            Some(folder) => Ok(Outcome::success(
                FolderView::from(folder),
                "Folder retrieved successfully",
            )),
            None => Ok(Outcome::not_found("Folder not found")),
        }
    }

    /// Lists all active folders.
    pub async fn get_all(&self) -> AppResult<Outcome<Vec<FolderView>>> {
        let folders = self.folders.find_all().await?;
        Ok(Outcome::success(
            folders.into_iter().map(FolderView::from).collect(),
            "Folders retrieved successfully",
        ))
    }

    /// Lists a user's active folders, verifying the user exists first.
    pub async fn get_by_user_id(&self, user_id: i64) -> AppResult<Outcome<Vec<FolderView>>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Ok(Outcome::not_found("User not found for folder"));
        }

        let folders = self.folders.find_by_user_id(user_id).await?;
        Ok(Outcome::success(
            folders.into_iter().map(FolderView::from).collect(),
            "Folders retrieved successfully",
        ))
    }

    /// Creates a new folder after verifying the owner and name uniqueness.
    pub async fn create(&self, req: CreateFolderRequest) -> AppResult<Outcome<FolderView>> {
        if self.users.find_by_id(req.user_id).await?.is_none() {
            return Ok(Outcome::not_found("User not found for folder"));
        }

        if !self
            .folders
            .is_name_unique_for_user(&req.name, req.user_id)
            .await?
        {
            return Ok(Outcome::conflict("Folder name already exists"));
        }

        let folder = Folder::create(req.name, req.user_id, req.description);

        let folder = self.folders.add(&folder).await?;
        self.uow.save_changes().await?;

        info!(folder_id = folder.id, user_id = folder.user_id, "Folder created");

        Ok(Outcome::success(
            FolderView::from(folder),
            "Folder created successfully",
        ))
    }

    /// Applies a partial update to an existing folder.
    pub async fn update(&self, id: i64, req: UpdateFolderRequest) -> AppResult<Outcome<FolderView>> {
        let Some(mut folder) = self.folders.find_by_id(id).await? else {
            return Ok(Outcome::not_found("Folder not found"));
        };

        if let Some(name) = req.name.as_deref() {
            if !name.trim().is_empty()
                && name != folder.name
                && !self
                    .folders
                    .is_name_unique_for_user(name, folder.user_id)
                    .await?
            {
                return Ok(Outcome::conflict("Folder name already exists"));
            }
        }

        folder.update(req.name.as_deref(), req.description);

        let folder = self.folders.update(&folder).await?;
        self.uow.save_changes().await?;

        info!(folder_id = folder.id, "Folder updated");

        Ok(Outcome::success(
            FolderView::from(folder),
            "Folder updated successfully",
        ))
    }

    /// Soft-deletes a folder by deactivating it.
    pub async fn delete(&self, id: i64) -> AppResult<Outcome<()>> {
        let Some(mut folder) = self.folders.find_by_id(id).await? else {
            return Ok(Outcome::not_found("Folder not found"));
        };

        folder.deactivate();
        self.folders.update(&folder).await?;
        self.uow.save_changes().await?;

        info!(folder_id = id, "Folder deactivated");

        Ok(Outcome::success_message("Folder deleted successfully"))
    }
}
