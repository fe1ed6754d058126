//! User domain entity and its persistence port.

pub mod model;
pub mod repository;

pub use model::User;
pub use repository::UserRepository;
