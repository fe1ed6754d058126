//! Folder domain entity and its persistence port.

pub mod model;
pub mod repository;

pub use model::Folder;
pub use repository::FolderRepository;
