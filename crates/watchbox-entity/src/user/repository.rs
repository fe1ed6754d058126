//! User repository port.

use async_trait::async_trait;

use watchbox_core::result::AppResult;
use watchbox_core::traits::Repository;

use super::model::User;

/// Data-access contract for users.
///
/// Reads see active users only; the uniqueness checks deliberately ignore
/// the active flag — a deactivated user still reserves its username and
/// email.
#[async_trait]
pub trait UserRepository: Repository<User, i64> {
    /// Find an active user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find an active user by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Whether no user, active or not, holds the given email.
    async fn is_email_unique(&self, email: &str) -> AppResult<bool>;

    /// Whether no user, active or not, holds the given username.
    async fn is_username_unique(&self, username: &str) -> AppResult<bool>;
}
