use crate::models::owned_record::{OwnedRecord, repoint};

use serde::{Deserialize, Serialize};

/// A stored search whose results are linked into `definition_point_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: i64,
    pub query: String,
    pub definition_point_id: i64,
    pub creator_id: i64,
}

impl SavedSearch {
    pub fn new(query: &str, definition_point_id: i64, creator_id: i64) -> Self {
        Self {
            id: 0,
            query: query.to_string(),
            definition_point_id,
            creator_id,
        }
    }
}

impl OwnedRecord for SavedSearch {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        repoint(&mut self.creator_id, from, to)
    }
}
