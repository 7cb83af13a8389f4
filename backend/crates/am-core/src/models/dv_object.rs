use crate::models::dv_object_type::DvObjectType;
use crate::models::owned_record::{OwnedRecord, repoint, repoint_optional};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A collection, dataset or file. Carries two independent attributions:
/// who created it and who released (published) it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DvObject {
    pub id: i64,
    pub object_type: DvObjectType,
    pub owner_id: Option<i64>,
    pub identifier: Option<String>,
    pub creator_id: i64,
    pub release_user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl DvObject {
    pub fn new(object_type: DvObjectType, owner_id: Option<i64>, creator_id: i64) -> Self {
        Self {
            id: 0,
            object_type,
            owner_id,
            identifier: None,
            creator_id,
            release_user_id: None,
            created_at: Utc::now(),
            published_at: None,
        }
    }

    pub fn is_released(&self) -> bool {
        self.published_at.is_some()
    }

    /// Mark as published by `release_user_id`.
    pub fn release(&mut self, release_user_id: i64) {
        self.release_user_id = Some(release_user_id);
        self.published_at = Some(Utc::now());
    }
}

impl OwnedRecord for DvObject {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        // Both fields are checked; `|` keeps the second rewrite from being skipped.
        repoint(&mut self.creator_id, from, to)
            | repoint_optional(&mut self.release_user_id, from, to)
    }
}
