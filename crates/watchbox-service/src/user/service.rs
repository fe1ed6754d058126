//! User CRUD orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use watchbox_core::outcome::Outcome;
use watchbox_core::result::AppResult;
use watchbox_core::traits::Repository;
use watchbox_entity::unit_of_work::UnitOfWork;
use watchbox_entity::user::{User, UserRepository};

use crate::password::PasswordHasher;

/// Handles user CRUD operations.
///
/// Expected business conditions (not found, duplicates) are reported as
/// failure outcomes; the error channel carries infrastructure faults only.
#[derive(Clone)]
pub struct UserService {
    /// Unit of work brokering repositories and persistence.
    uow: Arc<dyn UnitOfWork>,
    /// User repository, obtained from the unit of work.
    users: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

/// Data for creating a user. The password arrives in plaintext and is
/// hashed here, never stored.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name (optional).
    pub display_name: Option<String>,
}

/// Data for a partial user update. Absent fields mean "no change".
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    /// New username.
    pub username: Option<String>,
    /// New display name.
    pub display_name: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Outward-facing representation of a user. Never carries the password
/// hash.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Last login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login_at: user.last_login_at,
        }
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(uow: Arc<dyn UnitOfWork>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            users: uow.users(),
            uow,
            hasher,
        }
    }

    /// Gets an active user by ID.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Outcome<UserView>> {
        match self.users.find_by_id(id).await? {
            Some(user) => Ok(Outcome::success(
                UserView::from(user),
                "User retrieved successfully",
            )),
            None => Ok(Outcome::not_found("User not found")),
        }
    }

    /// Lists all active users.
    pub async fn get_all(&self) -> AppResult<Outcome<Vec<UserView>>> {
        let users = self.users.find_all().await?;
        Ok(Outcome::success(
            users.into_iter().map(UserView::from).collect(),
            "Users retrieved successfully",
        ))
    }

    /// Creates a new user after checking email and username uniqueness.
    pub async fn create(&self, req: CreateUserRequest) -> AppResult<Outcome<UserView>> {
        if !self.users.is_email_unique(&req.email).await? {
            return Ok(Outcome::conflict("Email already exists"));
        }

        if !self.users.is_username_unique(&req.username).await? {
            return Ok(Outcome::conflict("Username already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password);
        let user = User::create(req.username, req.email, password_hash, req.display_name);

        let user = self.users.add(&user).await?;
        self.uow.save_changes().await?;

        info!(user_id = user.id, "User created");

        Ok(Outcome::success(
            UserView::from(user),
            "User created successfully",
        ))
    }

    /// Applies a partial update to an existing user.
    pub async fn update(&self, id: i64, req: UpdateUserRequest) -> AppResult<Outcome<UserView>> {
        let Some(mut user) = self.users.find_by_id(id).await? else {
            return Ok(Outcome::not_found("User not found"));
        };

        if let Some(username) = req.username.as_deref() {
            if !username.trim().is_empty()
                && username != user.username
                && !self.users.is_username_unique(username).await?
            {
                return Ok(Outcome::conflict("Username already exists"));
            }
        }

        user.update(req.username.as_deref(), req.display_name, req.is_active);

        let user = self.users.update(&user).await?;
        self.uow.save_changes().await?;

        info!(user_id = user.id, "User updated");

        Ok(Outcome::success(
            UserView::from(user),
            "User updated successfully",
        ))
    }

    /// Soft-deletes a user by deactivating it.
    pub async fn delete(&self, id: i64) -> AppResult<Outcome<()>> {
        let Some(mut user) = self.users.find_by_id(id).await? else {
            return Ok(Outcome::not_found("User not found"));
        };

        user.deactivate();
        self.users.update(&user).await?;
        self.uow.save_changes().await?;

        info!(user_id = id, "User deactivated");

        Ok(Outcome::success_message("User deleted successfully"))
    }
}
