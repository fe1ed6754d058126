//! Folder application service.

pub mod service;

pub use service::{CreateFolderRequest, FolderService, FolderView, UpdateFolderRequest};
