use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Why a dataset is locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockReason {
    /// Files are being ingested
    Ingest,
    /// A workflow is running against the dataset
    Workflow,
    /// Submitted for review, waiting on a curator
    InReview,
    /// Publication is being finalized
    FinalizePublication,
    /// An edit is being applied
    EditInProgress,
}

impl LockReason {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingest => "ingest",
            Self::Workflow => "workflow",
            Self::InReview => "in_review",
            Self::FinalizePublication => "finalize_publication",
            Self::EditInProgress => "edit_in_progress",
        }
    }
}

impl FromStr for LockReason {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "ingest" => Ok(Self::Ingest),
            "workflow" => Ok(Self::Workflow),
            "in_review" => Ok(Self::InReview),
            "finalize_publication" => Ok(Self::FinalizePublication),
            "edit_in_progress" => Ok(Self::EditInProgress),
            _ => Err(CoreError::InvalidLockReason {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for LockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
