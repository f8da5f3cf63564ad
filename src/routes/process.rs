use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::{
    domain::{Submission, SubmissionError, UserRecord},
    routes::error_chain_fmt,
    store::UserStore,
};

#[derive(thiserror::Error)]
pub enum ProcessError {
    /// Required fields were absent or empty. A client error: nothing stored.
    #[error("Missing required fields: {}", .0.join(", "))]
    ValidationError(Vec<String>),
    /// Anything else that goes wrong while shaping the submission. Note this
    /// includes a non-numeric `age`: historically that has been reported as a
    /// server error rather than a 400, and consumers depend on it.
    #[error("Error processing data: {0}")]
    ProcessingError(#[from] anyhow::Error),
}

// Same logic to get the full error chain on `Debug`
impl std::fmt::Debug for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ProcessError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProcessError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ProcessError::ProcessingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Every failure goes out as JSON with an `error` key
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[derive(serde::Serialize)]
struct ProcessResponse {
    message: String,
    user_id: u64,
    processed_data: UserRecord,
    total_users: usize,
}

/// `process` validates a raw JSON submission, appends the resulting record to
/// the store and translates the outcome into the proper HTTP response.
#[tracing::instrument(name = "Processing a submission", skip(payload, store))]
pub async fn process(
    payload: web::Json<serde_json::Value>,
    store: web::Data<UserStore>,
) -> Result<HttpResponse, ProcessError> {
    let submission = Submission::parse(&payload).map_err(|e| match e {
        SubmissionError::MissingFields(fields) => ProcessError::ValidationError(fields),
        other => ProcessError::ProcessingError(other.into()),
    })?;

    let record = store.append(submission);
    let total_users = store.count();
    tracing::info!(user_id = record.id, total_users, "Stored a new submission");

    Ok(HttpResponse::Ok().json(ProcessResponse {
        message: format!(
            "Hello {}! Your data has been processed successfully.",
            record.name
        ),
        user_id: record.id,
        processed_data: record,
        total_users,
    }))
}
