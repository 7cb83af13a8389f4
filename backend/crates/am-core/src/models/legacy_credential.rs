use serde::{Deserialize, Serialize};

/// Username/password credential kept for accounts created through the
/// built-in login path. Linked to its account by `user_name`, not by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyCredential {
    pub id: i64,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub encrypted_password: Option<String>,
    pub password_encryption_version: i32,
}

impl LegacyCredential {
    pub fn new(user_name: &str, encrypted_password: Option<&str>) -> Self {
        Self {
            id: 0,
            user_name: user_name.to_string(),
            encrypted_password: encrypted_password.map(str::to_string),
            password_encryption_version: 1,
        }
    }
}
