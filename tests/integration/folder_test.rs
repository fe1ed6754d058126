//! Integration tests for the folder endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_folder_returns_the_created_view() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({
                "name": "Watchlist",
                "userId": user_id,
                "description": "Things to watch",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isSuccess"], json!(true));
    assert_eq!(
        response.body["message"],
        json!("Folder created successfully")
    );
    assert_eq!(response.body["data"]["name"], json!("Watchlist"));
    assert_eq!(response.body["data"]["userId"], json!(user_id));
    assert_eq!(response.body["data"]["isActive"], json!(true));
}

#[tokio::test]
async fn create_for_a_missing_user_fails_and_persists_nothing() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Watchlist", "userId": 42 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        json!("User not found for folder")
    );

    let list = app.request("GET", "/api/folders", None).await;
    assert!(list.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn folder_name_uniqueness_is_scoped_to_active_folders() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;

    let first = app.create_folder("Watchlist", user_id).await;

    let duplicate = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Watchlist", "userId": user_id })),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(
        duplicate.body["message"],
        json!("Folder name already exists")
    );

    let deleted = app
        .request("DELETE", &format!("/api/folders/{first}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    // The name is free again once the original folder is deactivated.
    let recreated = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Watchlist", "userId": user_id })),
        )
        .await;
    assert_eq!(recreated.status, StatusCode::OK);
    assert_eq!(recreated.body["isSuccess"], json!(true));
}

#[tokio::test]
async fn the_same_name_is_allowed_for_different_users() {
    let app = helpers::TestApp::new();
    let alice = app.create_user("alice", "alice@example.com").await;
    let bob = app.create_user("bob", "bob@example.com").await;

    app.create_folder("Watchlist", alice).await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Watchlist", "userId": bob })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn listing_folders_of_a_missing_user_fails() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/folders/user/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        json!("User not found for folder")
    );
}

#[tokio::test]
async fn listing_folders_of_a_user_without_folders_succeeds_with_an_empty_list() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;

    let response = app
        .request("GET", &format!("/api/folders/user/{user_id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isSuccess"], json!(true));
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listing_folders_excludes_other_users_and_deactivated_folders() {
    let app = helpers::TestApp::new();
    let alice = app.create_user("alice", "alice@example.com").await;
    let bob = app.create_user("bob", "bob@example.com").await;

    app.create_folder("Watchlist", alice).await;
    let favorites = app.create_folder("Favorites", alice).await;
    app.create_folder("Watchlist", bob).await;

    app.request("DELETE", &format!("/api/folders/{favorites}"), None)
        .await;

    let response = app
        .request("GET", &format!("/api/folders/user/{alice}"), None)
        .await;

    let folders = response.body["data"].as_array().unwrap().clone();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], json!("Watchlist"));
    assert_eq!(folders[0]["userId"], json!(alice));
}

#[tokio::test]
async fn rename_to_a_taken_name_is_a_conflict() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;

    app.create_folder("Watchlist", user_id).await;
    let favorites = app.create_folder("Favorites", user_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{favorites}"),
            Some(json!({ "name": "Watchlist" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        json!("Folder name already exists")
    );
}

#[tokio::test]
async fn update_applies_the_supplied_description() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;
    let folder = app.create_folder("Watchlist", user_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder}"),
            Some(json!({ "description": "Weekend queue" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], json!("Watchlist"));
    assert_eq!(
        response.body["data"]["description"],
        json!("Weekend queue")
    );
}

#[tokio::test]
async fn empty_folder_name_is_rejected_at_the_boundary() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "", "userId": user_id })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], json!("Validation failed"));
}

#[tokio::test]
async fn delete_soft_deletes_and_hides_the_folder() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("alice", "alice@example.com").await;
    let folder = app.create_folder("Watchlist", user_id).await;

    let deleted = app
        .request("DELETE", &format!("/api/folders/{folder}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body["message"],
        json!("Folder deleted successfully")
    );

    let lookup = app
        .request("GET", &format!("/api/folders/{folder}"), None)
        .await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
    assert_eq!(lookup.body["message"], json!("Folder not found"));
}

#[tokio::test]
async fn delete_of_a_missing_folder_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/api/folders/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], json!("Folder not found"));
}
