use crate::client::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use maestro_core::CoreError;
use thiserror::Error;

/// Errors from resource-level operations
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Ambiguous {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    CannotStartJob {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ResourceError {
    /// A lookup matched nothing
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ResourceError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A name lookup matched more than one record
    #[track_caller]
    pub fn ambiguous<S: Into<String>>(message: S) -> Self {
        ResourceError::Ambiguous {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The server declared the project ineligible for an update
    #[track_caller]
    pub fn cannot_start_job<S: Into<String>>(message: S) -> Self {
        ResourceError::CannotStartJob {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ResourceError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ResourceError::Client(ClientError::from_json(err))
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
