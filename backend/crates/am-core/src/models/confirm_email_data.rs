use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const CONFIRMATION_WINDOW_MINUTES: i64 = 1440;

/// Pending email verification for an account. At most one per account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmEmailData {
    pub id: i64,
    pub token: String,
    pub identity_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ConfirmEmailData {
    pub fn new(identity_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            token: Uuid::new_v4().to_string(),
            identity_id,
            created_at: now,
            expires_at: now + Duration::minutes(CONFIRMATION_WINDOW_MINUTES),
        }
    }
}
