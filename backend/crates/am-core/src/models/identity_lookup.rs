use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityLookup {
    pub id: i64,
    pub authentication_provider_id: String,
    pub persistent_user_id: String,
    pub identity_id: i64,
}

impl IdentityLookup {
    pub fn new(authentication_provider_id: &str, persistent_user_id: &str, identity_id: i64) -> Self {
        Self {
            id: 0,
            authentication_provider_id: authentication_provider_id.to_string(),
            persistent_user_id: persistent_user_id.to_string(),
            identity_id,
        }
    }
}
