use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] am_config::ConfigError),

    #[error(transparent)]
    Core(#[from] am_core::CoreError),

    #[error(transparent)]
    Db(#[from] am_db::DbError),

    #[error(transparent)]
    Merge(#[from] am_merge::MergeError),

    #[error("Account '{identifier}' not found {location}")]
    AccountNotFound {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("Cannot merge account '{identifier}' into itself {location}")]
    SelfMerge {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("Failed to create directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing result: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn account_not_found<S: Into<String>>(identifier: S) -> Self {
        Self::AccountNotFound {
            identifier: identifier.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn self_merge<S: Into<String>>(identifier: S) -> Self {
        Self::SelfMerge {
            identifier: identifier.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliErrorResult<T> = std::result::Result<T, CliError>;
