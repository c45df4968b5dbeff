pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::credential::Credential;
pub use models::organization::Organization;
pub use models::project::{Project, RelatedLinks};
pub use models::project_fields::ProjectFields;
pub use models::project_update::ProjectUpdate;
pub use models::related_link::RelatedLink;
pub use models::scm_type::ScmType;
pub use models::update_status::UpdateStatus;
