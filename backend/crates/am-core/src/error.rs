use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid principal identifier: {value} {location}")]
    InvalidPrincipal {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid dv object type: {value} {location}")]
    InvalidDvObjectType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid dataset lock reason: {value} {location}")]
    InvalidLockReason {
        value: String,
        location: ErrorLocation,
    },

    #[error(
        "Legacy credential '{user_name}' is not linked to account '{user_identifier}' {location}"
    )]
    CredentialMismatch {
        user_name: String,
        user_identifier: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreErrorResult<T> = StdResult<T, CoreError>;
