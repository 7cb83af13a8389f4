use crate::models::owned_record::{OwnedRecord, repoint_optional};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Answers collected before a download. Anonymous responses have no account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookResponse {
    pub id: i64,
    pub dataset_id: i64,
    pub identity_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub responded_at: DateTime<Utc>,
}

impl GuestbookResponse {
    pub fn new(dataset_id: i64, identity_id: Option<i64>) -> Self {
        Self {
            id: 0,
            dataset_id,
            identity_id,
            name: None,
            email: None,
            responded_at: Utc::now(),
        }
    }
}

impl OwnedRecord for GuestbookResponse {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        repoint_optional(&mut self.identity_id, from, to)
    }
}
