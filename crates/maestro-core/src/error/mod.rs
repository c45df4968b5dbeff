use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid scm type: {value} {location}")]
    InvalidScmType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid update status: {value} {location}")]
    InvalidUpdateStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid related link: {value} {location}")]
    InvalidRelatedLink {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
