use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// A parsed `related` URL, e.g. `/api/v1/project_updates/42/`.
///
/// Only the last two path segments matter: the collection name and the
/// record id. Everything before them (API prefix, version) is ignored so
/// the parse survives prefix changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedLink {
    pub kind: String,
    pub id: i64,
}

impl RelatedLink {
    #[track_caller]
    pub fn parse(url: &str) -> CoreErrorResult<Self> {
        let caller = Location::caller();
        let invalid = || CoreError::InvalidRelatedLink {
            value: url.to_string(),
            location: ErrorLocation::from(caller),
        };

        let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
        let [.., kind, id] = segments.as_slice() else {
            return Err(invalid());
        };
        let id: i64 = id.parse().map_err(|_| invalid())?;

        Ok(Self {
            kind: (*kind).to_string(),
            id,
        })
    }
}
