//! Request DTOs with validation.
//!
//! Shape constraints (required fields, length limits, email syntax) are
//! enforced here, at the transport boundary, before any service code
//! runs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use watchbox_service::folder::service as folder_service;
use watchbox_service::user::service as user_service;

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Username.
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    /// Email address.
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, max = 100, message = "Password must be 6-100 characters"))]
    pub password: String,
    /// Display name.
    #[validate(length(max = 100, message = "Display name must be at most 100 characters"))]
    pub display_name: Option<String>,
}

impl From<CreateUserRequest> for user_service::CreateUserRequest {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            display_name: req.display_name,
        }
    }
}

/// Update user request body. Absent fields mean "no change".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New username.
    #[validate(length(max = 50, message = "Username must be at most 50 characters"))]
    pub username: Option<String>,
    /// New display name.
    #[validate(length(max = 100, message = "Display name must be at most 100 characters"))]
    pub display_name: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for user_service::UpdateUserRequest {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            display_name: req.display_name,
            is_active: req.is_active,
        }
    }
}

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 100, message = "Folder name must be 1-100 characters"))]
    pub name: String,
    /// Description.
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    /// The owning user.
    pub user_id: i64,
}

impl From<CreateFolderRequest> for folder_service::CreateFolderRequest {
    fn from(req: CreateFolderRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            user_id: req.user_id,
        }
    }
}

/// Update folder request body. Absent fields mean "no change".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    /// New name.
    #[validate(length(max = 100, message = "Folder name must be at most 100 characters"))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

impl From<UpdateFolderRequest> for folder_service::UpdateFolderRequest {
    fn from(req: UpdateFolderRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}
