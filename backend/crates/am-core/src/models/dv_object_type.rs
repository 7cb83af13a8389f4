use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DvObjectType {
    Collection,
    Dataset,
    DataFile,
}

impl DvObjectType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Dataset => "dataset",
            Self::DataFile => "data_file",
        }
    }
}

impl FromStr for DvObjectType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "collection" => Ok(Self::Collection),
            "dataset" => Ok(Self::Dataset),
            "data_file" => Ok(Self::DataFile),
            _ => Err(CoreError::InvalidDvObjectType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DvObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
