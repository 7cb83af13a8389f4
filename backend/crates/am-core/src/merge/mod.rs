pub mod merge_result;
pub mod reassignment_counts;
pub mod record_category;
pub mod role_reconciliation;
