pub mod credential;
pub mod organization;
pub mod project;
pub mod project_fields;
pub mod project_update;
pub mod related_link;
pub mod scm_type;
pub mod update_status;
