//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use watchbox_api::AppState;
use watchbox_core::config::AppConfig;
use watchbox_database::repositories::MemoryUnitOfWork;
use watchbox_entity::unit_of_work::UnitOfWork;
use watchbox_service::{FolderService, PasswordHasher, UserService};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Decoded response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application backed by the in-memory store
    pub fn new() -> Self {
        let uow: Arc<dyn UnitOfWork> = Arc::new(MemoryUnitOfWork::new());
        let password_hasher = Arc::new(PasswordHasher::new());
        let user_service = Arc::new(UserService::new(Arc::clone(&uow), password_hasher));
        let folder_service = Arc::new(FolderService::new(Arc::clone(&uow)));

        let state = AppState {
            config: Arc::new(AppConfig::default()),
            user_service,
            folder_service,
        };

        Self {
            router: watchbox_api::build_router(state),
        }
    }

    /// Send a request and decode the JSON response
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is not valid JSON")
        };

        TestResponse { status, body }
    }

    /// Create a user through the API and return its id
    #[allow(dead_code)]
    pub async fn create_user(&self, username: &str, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": "secret123",
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "user setup failed");
        response.body["data"]["id"].as_i64().expect("user id")
    }

    /// Create a folder through the API and return its id
    #[allow(dead_code)]
    pub async fn create_folder(&self, name: &str, user_id: i64) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(serde_json::json!({
                    "name": name,
                    "userId": user_id,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "folder setup failed");
        response.body["data"]["id"].as_i64().expect("folder id")
    }
}
