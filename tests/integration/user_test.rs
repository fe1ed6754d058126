//! Integration tests for the user endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_user_returns_the_created_view() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "secret123",
                "displayName": "Alice",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isSuccess"], json!(true));
    assert_eq!(response.body["message"], json!("User created successfully"));
    assert_eq!(response.body["data"]["username"], json!("alice"));
    assert_eq!(response.body["data"]["displayName"], json!("Alice"));
    assert_eq!(response.body["data"]["isActive"], json!(true));
    // The password digest never leaves the service layer.
    assert!(response.body["data"].get("passwordHash").is_none());
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_even_after_deactivation() {
    let app = helpers::TestApp::new();
    let id = app.create_user("alice", "alice@example.com").await;

    let deleted = app.request("DELETE", &format!("/api/users/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "someone-else",
                "email": "alice@example.com",
                "password": "secret123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["isSuccess"], json!(false));
    assert_eq!(response.body["message"], json!("Email already exists"));
}

#[tokio::test]
async fn duplicate_username_with_unique_email_is_a_conflict() {
    let app = helpers::TestApp::new();
    app.create_user("alice", "alice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "alice",
                "email": "other@example.com",
                "password": "secret123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], json!("Username already exists"));
}

#[tokio::test]
async fn invalid_fields_are_rejected_before_the_service_runs() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "alice",
                "email": "not-an-email",
                "password": "short",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["isSuccess"], json!(false));
    assert_eq!(response.body["message"], json!("Validation failed"));
    assert!(!response.body["errors"].as_array().unwrap().is_empty());

    // Nothing was persisted.
    let list = app.request("GET", "/api/users", None).await;
    assert!(list.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/users", Some(json!({ "username": 42 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["isSuccess"], json!(false));
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/users/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], json!("User not found"));
}

#[tokio::test]
async fn update_applies_only_the_supplied_fields() {
    let app = helpers::TestApp::new();
    let id = app.create_user("alice", "alice@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "displayName": "Alice A." })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], json!("User updated successfully"));
    assert_eq!(response.body["data"]["username"], json!("alice"));
    assert_eq!(response.body["data"]["displayName"], json!("Alice A."));
    assert!(!response.body["data"]["updatedAt"].is_null());
}

#[tokio::test]
async fn blank_username_in_update_is_treated_as_no_change() {
    let app = helpers::TestApp::new();
    let id = app.create_user("alice", "alice@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "username": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], json!("alice"));
    assert!(response.body["data"]["updatedAt"].is_null());
}

#[tokio::test]
async fn update_to_a_taken_username_is_a_conflict() {
    let app = helpers::TestApp::new();
    app.create_user("alice", "alice@example.com").await;
    let bob = app.create_user("bob", "bob@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{bob}"),
            Some(json!({ "username": "alice" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], json!("Username already exists"));
}

#[tokio::test]
async fn update_of_a_missing_user_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/users/42", Some(json!({ "displayName": "X" })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], json!("User not found"));
}

#[tokio::test]
async fn delete_soft_deletes_and_hides_the_user() {
    let app = helpers::TestApp::new();
    let id = app.create_user("alice", "alice@example.com").await;

    let deleted = app.request("DELETE", &format!("/api/users/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["isSuccess"], json!(true));
    assert_eq!(deleted.body["message"], json!("User deleted successfully"));
    assert!(deleted.body.get("data").is_none());

    let lookup = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/users", None).await;
    assert!(list.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_of_a_missing_user_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/api/users/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], json!("User not found"));
}

#[tokio::test]
async fn list_returns_all_active_users() {
    let app = helpers::TestApp::new();
    app.create_user("alice", "alice@example.com").await;
    app.create_user("bob", "bob@example.com").await;

    let response = app.request("GET", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        json!("Users retrieved successfully")
    );
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);
}
