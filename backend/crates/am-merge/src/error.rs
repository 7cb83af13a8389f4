use am_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Role assignment for '{assignee}' is not held by an account {location}")]
    InvalidAssigneeKind {
        assignee: String,
        location: ErrorLocation,
    },

    #[error("Cannot merge account '{identifier}' into itself {location}")]
    SelfMerge {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("Expected at most one {record} for account {identity_id}, found {count} {location}")]
    MissingAuxiliaryRecord {
        record: &'static str,
        identity_id: i64,
        count: usize,
        location: ErrorLocation,
    },

    /// Store failures pass through untouched.
    #[error(transparent)]
    Store(#[from] DbError),
}

impl MergeError {
    /// Stable code for callers that report failures outside of Rust.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAssigneeKind { .. } => "INVALID_ASSIGNEE_KIND",
            Self::SelfMerge { .. } => "SELF_MERGE",
            Self::MissingAuxiliaryRecord { .. } => "MISSING_AUXILIARY_RECORD",
            Self::Store(DbError::NotFound { .. }) => "NOT_FOUND",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

pub type MergeErrorResult<T> = std::result::Result<T, MergeError>;
