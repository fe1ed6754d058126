//! User application service.

pub mod service;

pub use service::{CreateUserRequest, UpdateUserRequest, UserService, UserView};
