//! # watchbox-api
//!
//! HTTP API layer for WatchBox built on Axum.
//!
//! Provides the REST endpoints, request DTOs with declarative validation,
//! and the mapping from service outcomes and application errors onto HTTP
//! responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
