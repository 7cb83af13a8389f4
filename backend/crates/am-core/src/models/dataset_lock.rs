use crate::models::lock_reason::LockReason;
use crate::models::owned_record::{OwnedRecord, repoint};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetLock {
    pub id: i64,
    pub dataset_id: i64,
    pub identity_id: i64,
    pub reason: LockReason,
    pub info: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl DatasetLock {
    pub fn new(dataset_id: i64, identity_id: i64, reason: LockReason) -> Self {
        Self {
            id: 0,
            dataset_id,
            identity_id,
            reason,
            info: None,
            started_at: Utc::now(),
        }
    }
}

impl OwnedRecord for DatasetLock {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        repoint(&mut self.identity_id, from, to)
    }
}
