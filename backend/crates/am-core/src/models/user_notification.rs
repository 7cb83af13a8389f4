use crate::models::owned_record::{OwnedRecord, repoint};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNotification {
    pub id: i64,
    pub recipient_id: i64,
    pub notification_type: String,
    pub object_id: Option<i64>,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
    pub emailed: bool,
}

impl UserNotification {
    pub fn new(recipient_id: i64, notification_type: &str, object_id: Option<i64>) -> Self {
        Self {
            id: 0,
            recipient_id,
            notification_type: notification_type.to_string(),
            object_id,
            sent_at: Utc::now(),
            read: false,
            emailed: false,
        }
    }
}

impl OwnedRecord for UserNotification {
    fn id(&self) -> i64 {
        self.id
    }

    fn reassign_owner(&mut self, from: i64, to: i64) -> bool {
        repoint(&mut self.recipient_id, from, to)
    }
}
