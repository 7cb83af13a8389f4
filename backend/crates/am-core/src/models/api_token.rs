use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_LIFETIME_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: i64,
    #[serde(skip_serializing)]
    pub token_string: String,
    pub identity_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub disabled: bool,
}

impl ApiToken {
    pub fn new(identity_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            token_string: Uuid::new_v4().to_string(),
            identity_id,
            created_at: now,
            expires_at: now + Duration::days(TOKEN_LIFETIME_DAYS),
            disabled: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
