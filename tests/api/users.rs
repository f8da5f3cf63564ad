use serde_json::json;

use crate::helpers::{spawn_app, valid_submission};

#[tokio::test]
async fn users_starts_out_empty() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_users().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["total"], 0);
    assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn users_returns_stored_records_in_insertion_order() {
    // Arrange
    let app = spawn_app().await;
    let mut second = valid_submission();
    second["name"] = json!("Beth");
    app.post_process(&valid_submission()).await;
    app.post_process(&second).await;

    // Act
    let body: serde_json::Value = app.get_users().await.json().await.unwrap();

    // Assert
    assert_eq!(body["total"], 2);
    assert_eq!(body["users"][0]["id"], 1);
    assert_eq!(body["users"][0]["name"], "Alice");
    assert_eq!(body["users"][1]["id"], 2);
    assert_eq!(body["users"][1]["name"], "Beth");
}

#[tokio::test]
async fn users_returns_the_record_exactly_as_ingested() {
    // Arrange
    let app = spawn_app().await;
    let ingested: serde_json::Value = app
        .post_process(&valid_submission())
        .await
        .json()
        .await
        .unwrap();

    // Act
    let listed: serde_json::Value = app.get_users().await.json().await.unwrap();

    // Assert
    assert_eq!(listed["users"][0], ingested["processed_data"]);
}

#[tokio::test]
async fn users_is_idempotent() {
    // Arrange
    let app = spawn_app().await;
    app.post_process(&valid_submission()).await;

    // Act
    let first: serde_json::Value = app.get_users().await.json().await.unwrap();
    let second: serde_json::Value = app.get_users().await.json().await.unwrap();

    // Assert
    assert_eq!(first, second);
}
