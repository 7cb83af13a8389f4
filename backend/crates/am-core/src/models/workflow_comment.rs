use crate::models::owned_record::{OwnedRecord, repoint};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowComment {
    pub id: i64,
    pub dataset_version_id: i64,
    pub identity_id: i64,
    pub comment_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl WorkflowComment {
    pub fn new(dataset_version_id: i64, identity_id: i64, comment_type: &str, message: &str) -> Self {
        Self {
            id: 0,
            dataset_version_id,
            identity_id,
            comment_type: comment_type.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl OwnedRecord for WorkflowComment {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        repoint(&mut self.identity_id, from, to)
    }
}
