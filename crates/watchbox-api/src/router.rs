//! Route definitions for the WatchBox HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(folder_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// User CRUD endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Folder CRUD endpoints
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route("/folders/{id}", put(handlers::folder::update_folder))
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
        .route(
            "/folders/user/{user_id}",
            get(handlers::folder::list_user_folders),
        )
}

/// Health check endpoint (no auth, no state)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors = cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ));

    cors
}
