use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RoleReconciliation {
    /// Consumed grants re-addressed to the base account
    pub repointed: u64,
    /// Consumed grants the base account already held
    pub dropped: u64,
    /// Rows removed by the final sweep of the consumed principal
    pub deleted: u64,
}
