//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// Users are soft-deleted: `is_active` flips to `false` and the row is
/// never removed. Default reads exclude deactivated users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, assigned by the store on insert.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Password digest. Never serialized outward.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Builds a new active user. The caller is responsible for hashing the
    /// password before calling.
    pub fn create(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            display_name,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
            last_login_at: None,
        }
    }

    /// Applies a partial update. Absent fields are left unchanged; the
    /// username is applied only when non-blank and different from the
    /// current value. `updated_at` is touched only when something changed.
    pub fn update(
        &mut self,
        username: Option<&str>,
        display_name: Option<String>,
        is_active: Option<bool>,
    ) {
        let mut changed = false;

        if let Some(username) = username {
            if !username.trim().is_empty() && username != self.username {
                self.username = username.to_string();
                changed = true;
            }
        }

        if let Some(display_name) = display_name {
            self.display_name = Some(display_name);
            changed = true;
        }

        if let Some(is_active) = is_active {
            self.is_active = is_active;
            changed = true;
        }

        if changed {
            self.updated_at = Some(Utc::now());
        }
    }

    /// Records a successful login.
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    /// Soft-deletes the user.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Reactivates the user.
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}
