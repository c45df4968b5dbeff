use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Source-control backing of a project.
///
/// The server represents a manual project as the empty string, so that is
/// the wire form; everywhere the user sees it, the word "manual" is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScmType {
    /// Playbooks live in a directory already present on the server
    #[default]
    #[serde(rename = "")]
    Manual,
    Git,
    Hg,
    Svn,
}

impl ScmType {
    /// Command-line spelling (the wire form of `Manual` is the empty string)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Git => "git",
            Self::Hg => "hg",
            Self::Svn => "svn",
        }
    }
}

impl FromStr for ScmType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "" | "manual" => Ok(Self::Manual),
            "git" => Ok(Self::Git),
            "hg" => Ok(Self::Hg),
            "svn" => Ok(Self::Svn),
            _ => Err(CoreError::InvalidScmType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ScmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
