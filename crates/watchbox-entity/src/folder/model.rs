//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder owned by a user.
///
/// Soft-deleted like users. The (owner, name) pair is unique among active
/// folders only, so a deactivated folder's name can be reused.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier, assigned by the store on insert.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The owning user.
    pub user_id: i64,
    /// Whether the folder is active.
    pub is_active: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Folder {
    /// Builds a new active folder for the given owner.
    pub fn create(name: impl Into<String>, user_id: i64, description: Option<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description,
            user_id,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Applies a partial update. Absent fields are left unchanged; the name
    /// is applied only when non-blank and different from the current value.
    pub fn update(&mut self, name: Option<&str>, description: Option<String>) {
        let mut changed = false;

        if let Some(name) = name {
            if !name.trim().is_empty() && name != self.name {
                self.name = name.to_string();
                changed = true;
            }
        }

        if let Some(description) = description {
            self.description = Some(description);
            changed = true;
        }

        if changed {
            self.updated_at = Some(Utc::now());
        }
    }

    /// Soft-deletes the folder.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Reactivates the folder.
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}
