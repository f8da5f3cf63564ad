use chrono::{DateTime, Utc};

/// A single accepted submission, as stored and as returned under
/// `processed_data` and `/users`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
    pub country: String,
    pub occupation: String,
    pub interests: Vec<String>,
    pub bio: String,
    // Kept as `timestamp` on the wire, which is what API consumers already read
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}
