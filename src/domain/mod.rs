mod submission;
mod user_record;

pub use submission::{Submission, SubmissionError};
pub use user_record::UserRecord;
