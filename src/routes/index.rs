use actix_web::{HttpResponse, http::header::ContentType};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>User Intake API</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background-color: #f0f0f0; }
        .container { background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #333; }
        .info { background: #e7f3ff; padding: 15px; border-radius: 5px; margin: 20px 0; }
    </style>
</head>
<body>
    <div class="container">
        <h1>User Intake API</h1>
        <p>Welcome to the user intake backend server!</p>
        <div class="info">
            <h3>Available Endpoints:</h3>
            <ul>
                <li><strong>POST /process</strong> - Process form data from the frontend</li>
                <li><strong>GET /users</strong> - Get all processed users</li>
                <li><strong>GET /health</strong> - Health check endpoint</li>
            </ul>
        </div>
        <p>This backend is designed to work with the form frontend on port 3000.</p>
    </div>
</body>
</html>
"#;

/// Static landing page listing the available endpoints.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}
