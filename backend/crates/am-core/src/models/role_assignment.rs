use crate::CoreErrorResult;
use crate::models::principal_kind::{PrincipalKind, is_account_principal};

use serde::{Deserialize, Serialize};

/// A permission grant: `role` on the object `definition_point_id`, held by
/// the principal `assignee_identifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub id: i64,
    pub assignee_identifier: String,
    pub definition_point_id: i64,
    pub role: String,
    pub private_url_token: Option<String>,
}

impl RoleAssignment {
    pub fn new(assignee_identifier: &str, definition_point_id: i64, role: &str) -> Self {
        Self {
            id: 0,
            assignee_identifier: assignee_identifier.to_string(),
            definition_point_id,
            role: role.to_string(),
            private_url_token: None,
        }
    }

    pub fn assignee_kind(&self) -> CoreErrorResult<PrincipalKind> {
        PrincipalKind::of(&self.assignee_identifier)
    }

    pub fn is_account_assignee(&self) -> bool {
        is_account_principal(&self.assignee_identifier)
    }

    /// Identity of the grant for duplicate detection. The private URL token
    /// is deliberately not part of it.
    pub fn grant_key(&self) -> (i64, &str) {
        (self.definition_point_id, self.role.as_str())
    }
}
