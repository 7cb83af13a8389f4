use crate::models::owned_record::{OwnedRecord, repoint};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records that an account contributed to (edited or accepted terms on) a
/// dataset version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetVersionUser {
    pub id: i64,
    pub dataset_version_id: i64,
    pub identity_id: i64,
    pub last_updated_at: DateTime<Utc>,
}

impl DatasetVersionUser {
    pub fn new(dataset_version_id: i64, identity_id: i64) -> Self {
        Self {
            id: 0,
            dataset_version_id,
            identity_id,
            last_updated_at: Utc::now(),
        }
    }
}

impl OwnedRecord for DatasetVersionUser {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        repoint(&mut self.identity_id, from, to)
    }
}
