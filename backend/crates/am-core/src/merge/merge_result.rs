use crate::merge::reassignment_counts::ReassignmentCounts;
use crate::merge::role_reconciliation::RoleReconciliation;

use serde::Serialize;

/// Audit record of a completed (or previewed) merge.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MergeResult {
    pub base_identifier: String,
    pub consumed_identifier: String,
    pub roles: RoleReconciliation,
    pub reassigned: ReassignmentCounts,
    pub committed: bool,
}

impl MergeResult {
    pub fn new(base_identifier: &str, consumed_identifier: &str) -> Self {
        Self {
            base_identifier: base_identifier.to_string(),
            consumed_identifier: consumed_identifier.to_string(),
            ..Self::default()
        }
    }
}
