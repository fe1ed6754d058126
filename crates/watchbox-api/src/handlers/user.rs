//! User CRUD handlers.

use axum::extract::{Path, State};

use watchbox_service::user::UserView;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::error::{ApiError, ApiOutcome};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiOutcome<Vec<UserView>>, ApiError> {
    Ok(ApiOutcome(state.user_service.get_all().await?))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiOutcome<UserView>, ApiError> {
    Ok(ApiOutcome(state.user_service.get_by_id(id).await?))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<ApiOutcome<UserView>, ApiError> {
    Ok(ApiOutcome(state.user_service.create(req.into()).await?))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<ApiOutcome<UserView>, ApiError> {
    Ok(ApiOutcome(state.user_service.update(id, req.into()).await?))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiOutcome<()>, ApiError> {
    Ok(ApiOutcome(state.user_service.delete(id).await?))
}
