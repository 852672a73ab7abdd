// Job ID source

use crate::domain::JobId;

/// Assigns IDs to newly created job records. IDs are never reused.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> JobId;
}

/// Random UUID v4, hyphenated
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn next_id(&self) -> JobId {
        uuid::Uuid::new_v4().hyphenated().to_string()
    }
}
