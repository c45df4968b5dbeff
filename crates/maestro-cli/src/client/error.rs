use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from talking to the Maestro API.
///
/// `Api` carries the server's own error envelope; `Http` and `Json` cover
/// the transport and decode failures around it.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("the server reported {code}: {message} {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("request failed: {source} {location}")]
    Http {
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode the response body: {source} {location}")]
    Json {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Server error envelope with location
    #[track_caller]
    pub fn api_error(code: String, message: String) -> Self {
        ClientError::Api {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a transport error with context
    #[track_caller]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        ClientError::Http {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Wrap a decode error with context
    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        ClientError::Json {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
