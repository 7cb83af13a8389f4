use crate::merge::record_category::RecordCategory;

use serde::Serialize;

/// Number of records re-pointed per category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReassignmentCounts {
    pub dataset_version_users: u64,
    pub dataset_locks: u64,
    pub dv_objects: u64,
    pub guestbook_responses: u64,
    pub user_notifications: u64,
    pub saved_searches: u64,
    pub workflow_comments: u64,
    pub access_requests: u64,
}

impl ReassignmentCounts {
    pub fn record(&mut self, category: RecordCategory, count: u64) {
        *self.slot(category) += count;
    }

    pub fn get(&self, category: RecordCategory) -> u64 {
        match category {
            RecordCategory::DatasetVersionUsers => self.dataset_version_users,
            RecordCategory::DatasetLocks => self.dataset_locks,
            RecordCategory::DvObjects => self.dv_objects,
            RecordCategory::GuestbookResponses => self.guestbook_responses,
            RecordCategory::UserNotifications => self.user_notifications,
            RecordCategory::SavedSearches => self.saved_searches,
            RecordCategory::WorkflowComments => self.workflow_comments,
            RecordCategory::AccessRequests => self.access_requests,
        }
    }

    pub fn total(&self) -> u64 {
        RecordCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    fn slot(&mut self, category: RecordCategory) -> &mut u64 {
        match category {
            RecordCategory::DatasetVersionUsers => &mut self.dataset_version_users,
            RecordCategory::DatasetLocks => &mut self.dataset_locks,
            RecordCategory::DvObjects => &mut self.dv_objects,
            RecordCategory::GuestbookResponses => &mut self.guestbook_responses,
            RecordCategory::UserNotifications => &mut self.user_notifications,
            RecordCategory::SavedSearches => &mut self.saved_searches,
            RecordCategory::WorkflowComments => &mut self.workflow_comments,
            RecordCategory::AccessRequests => &mut self.access_requests,
        }
    }
}
