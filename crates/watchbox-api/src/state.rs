//! Application state shared across all handlers.

use std::sync::Arc;

use watchbox_core::config::AppConfig;
use watchbox_service::{FolderService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User service.
    pub user_service: Arc<UserService>,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
}
