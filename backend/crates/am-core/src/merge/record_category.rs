use serde::Serialize;

/// Every kind of dependent record a merge re-points from the consumed
/// account to the base account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCategory {
    DatasetVersionUsers,
    DatasetLocks,
    DvObjects,
    GuestbookResponses,
    UserNotifications,
    SavedSearches,
    WorkflowComments,
    AccessRequests,
}

impl RecordCategory {
    pub const ALL: [RecordCategory; 8] = [
        Self::DatasetVersionUsers,
        Self::DatasetLocks,
        Self::DvObjects,
        Self::GuestbookResponses,
        Self::UserNotifications,
        Self::SavedSearches,
        Self::WorkflowComments,
        Self::AccessRequests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DatasetVersionUsers => "dataset_version_users",
            Self::DatasetLocks => "dataset_locks",
            Self::DvObjects => "dv_objects",
            Self::GuestbookResponses => "guestbook_responses",
            Self::UserNotifications => "user_notifications",
            Self::SavedSearches => "saved_searches",
            Self::WorkflowComments => "workflow_comments",
            Self::AccessRequests => "access_requests",
        }
    }
}

impl std::fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
