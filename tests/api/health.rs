use crate::helpers::{spawn_app, valid_submission};

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_health().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "user-intake");
    assert!(body["timestamp"].is_string());
    assert_eq!(body["users_processed"], 0);
}

#[tokio::test]
async fn health_check_reports_the_number_of_processed_users() {
    // Arrange
    let app = spawn_app().await;
    app.post_process(&valid_submission()).await;

    // Act
    let body: serde_json::Value = app.get_health().await.json().await.unwrap();

    // Assert
    assert_eq!(body["users_processed"], 1);
}

#[tokio::test]
async fn health_check_count_is_stable_between_ingests() {
    // Arrange
    let app = spawn_app().await;
    app.post_process(&valid_submission()).await;

    // Act
    let first: serde_json::Value = app.get_health().await.json().await.unwrap();
    let second: serde_json::Value = app.get_health().await.json().await.unwrap();

    // Assert
    assert_eq!(first["users_processed"], second["users_processed"]);
}
