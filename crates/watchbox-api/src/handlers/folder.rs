//! Folder CRUD handlers.

use axum::extract::{Path, State};

use watchbox_service::folder::FolderView;

use crate::dto::request::{CreateFolderRequest, UpdateFolderRequest};
use crate::error::{ApiError, ApiOutcome};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<ApiOutcome<Vec<FolderView>>, ApiError> {
    Ok(ApiOutcome(state.folder_service.get_all().await?))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiOutcome<FolderView>, ApiError> {
    Ok(ApiOutcome(state.folder_service.get_by_id(id).await?))
}

/// GET /api/folders/user/{user_id}
pub async fn list_user_folders(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<ApiOutcome<Vec<FolderView>>, ApiError> {
    Ok(ApiOutcome(
        state.folder_service.get_by_user_id(user_id).await?,
    ))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<ApiOutcome<FolderView>, ApiError> {
    Ok(ApiOutcome(state.folder_service.create(req.into()).await?))
}

/// PUT /api/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateFolderRequest>,
) -> Result<ApiOutcome<FolderView>, ApiError> {
    Ok(ApiOutcome(
        state.folder_service.update(id, req.into()).await?,
    ))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiOutcome<()>, ApiError> {
    Ok(ApiOutcome(state.folder_service.delete(id).await?))
}
