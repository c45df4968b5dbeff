use crate::models::project::Project;
use crate::models::scm_type::ScmType;

use serde::Serialize;

/// Writable project fields for create and modify requests.
///
/// Only fields that are `Some` are serialized, so a modify touches exactly
/// what the caller asked for. Organization is deliberately absent: it can
/// only be set at creation time, through the organization's own project
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_type: Option<ScmType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_credential: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_delete_on_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_update_on_launch: Option<bool>,
}

impl ProjectFields {
    /// True when applying these fields to `project` would change it.
    pub fn differs_from(&self, project: &Project) -> bool {
        fn differs<T: PartialEq>(field: &Option<T>, current: &T) -> bool {
            field.as_ref().is_some_and(|value| value != current)
        }

        fn differs_opt<T: PartialEq>(field: &Option<T>, current: &Option<T>) -> bool {
            field
                .as_ref()
                .is_some_and(|value| current.as_ref() != Some(value))
        }

        differs(&self.name, &project.name)
            || differs_opt(&self.description, &project.description)
            || differs(&self.scm_type, &project.scm_type)
            || differs_opt(&self.scm_url, &project.scm_url)
            || differs_opt(&self.local_path, &project.local_path)
            || differs_opt(&self.scm_branch, &project.scm_branch)
            || differs_opt(&self.scm_credential, &project.scm_credential)
            || differs(&self.scm_clean, &project.scm_clean)
            || differs(&self.scm_delete_on_update, &project.scm_delete_on_update)
            || differs(&self.scm_update_on_launch, &project.scm_update_on_launch)
    }
}
