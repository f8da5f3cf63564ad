use crate::helpers::spawn_app;

#[tokio::test]
async fn the_landing_page_is_html_and_lists_the_endpoints() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = reqwest::get(&app.address).await.unwrap();

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("/process"));
    assert!(body.contains("/users"));
    assert!(body.contains("/health"));
}
