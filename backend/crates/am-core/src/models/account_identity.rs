use crate::models::principal_kind::account_principal;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The durable account record. Every owned record, token and lookup points
/// at `id`; role assignments address it through `@user_identifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub id: i64,
    pub user_identifier: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub affiliation: Option<String>,
    pub superuser: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AccountIdentity {
    /// New, not yet persisted account (`id` is assigned by the store).
    pub fn new(user_identifier: &str, email: &str) -> Self {
        Self {
            id: 0,
            user_identifier: user_identifier.to_string(),
            email: email.to_string(),
            first_name: None,
            last_name: None,
            affiliation: None,
            superuser: false,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    pub fn principal(&self) -> String {
        account_principal(&self.user_identifier)
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.user_identifier.clone(),
        }
    }
}
