mod project;
mod project_fields;
mod related_link;
mod scm_type;
mod update_status;
