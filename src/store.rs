use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{Submission, UserRecord};

/// Append-only, in-memory collection of accepted records.
///
/// Records are held in creation order and are never mutated or removed, so
/// the store's length always equals the highest assigned id. The store is
/// shared across handlers through `web::Data`; all state is lost when the
/// process exits.
#[derive(Default)]
pub struct UserStore {
    records: RwLock<Vec<UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id, stamp the creation time and store the record.
    ///
    /// Id assignment and the push happen under a single write lock, so ids
    /// stay strictly increasing even under concurrent ingests.
    pub fn append(&self, submission: Submission) -> UserRecord {
        let mut records = self.records.write();
        let record = UserRecord {
            id: records.len() as u64 + 1,
            name: submission.name,
            email: submission.email,
            age: submission.age,
            gender: submission.gender,
            country: submission.country,
            occupation: submission.occupation,
            interests: submission.interests,
            bio: submission.bio,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        record
    }

    /// Every stored record, in insertion order.
    pub fn all(&self) -> Vec<UserRecord> {
        self.records.read().clone()
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }
}
