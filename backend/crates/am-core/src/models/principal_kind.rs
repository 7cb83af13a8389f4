use crate::{CoreError, CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const ACCOUNT_PREFIX: char = '@';
pub const GROUP_PREFIX: char = '&';
pub const BUILTIN_PREFIX: char = ':';

/// Kind of principal a role assignment is addressed to, derived from the
/// marker character at the start of the assignee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    /// A single authenticated account (`@alice`)
    Account,
    /// An explicit or provider-backed group (`&explicit/1-staff`)
    Group,
    /// A built-in principal such as `:authenticated-users`
    Builtin,
}

impl PrincipalKind {
    pub fn prefix(&self) -> char {
        match self {
            Self::Account => ACCOUNT_PREFIX,
            Self::Group => GROUP_PREFIX,
            Self::Builtin => BUILTIN_PREFIX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Group => "group",
            Self::Builtin => "builtin",
        }
    }

    /// Classify a principal identifier by its marker character.
    #[track_caller]
    pub fn of(principal: &str) -> CoreErrorResult<Self> {
        match principal.chars().next() {
            Some(ACCOUNT_PREFIX) => Ok(Self::Account),
            Some(GROUP_PREFIX) => Ok(Self::Group),
            Some(BUILTIN_PREFIX) => Ok(Self::Builtin),
            _ => Err(CoreError::InvalidPrincipal {
                value: principal.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the account principal (`@identifier`) for a bare user identifier.
pub fn account_principal(user_identifier: &str) -> String {
    format!("{ACCOUNT_PREFIX}{user_identifier}")
}

/// True when the principal carries the account-kind marker.
pub fn is_account_principal(principal: &str) -> bool {
    principal.starts_with(ACCOUNT_PREFIX)
}
