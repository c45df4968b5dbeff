use crate::models::scm_type::ScmType;

use serde::{Deserialize, Serialize};

/// A project record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning organization, absent for unowned projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<i64>,
    #[serde(default)]
    pub scm_type: ScmType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_url: Option<String>,
    /// Checkout directory for manual projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_credential: Option<i64>,
    #[serde(default)]
    pub scm_clean: bool,
    #[serde(default)]
    pub scm_delete_on_update: bool,
    #[serde(default)]
    pub scm_update_on_launch: bool,
    #[serde(default)]
    pub related: RelatedLinks,
}

/// The subset of a record's `related` block the controller follows.
///
/// The server sends an empty string when a link slot exists but points at
/// nothing, so the accessors treat empty the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl RelatedLinks {
    /// Link to the update that is running right now, if any.
    pub fn current(&self) -> Option<&str> {
        Self::link(&self.current_update)
    }

    /// Link to the most recently finished update, if any.
    pub fn last(&self) -> Option<&str> {
        Self::link(&self.last_update)
    }

    fn link(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|url| !url.is_empty())
    }
}
