pub(crate) mod credential;
pub(crate) mod error;
pub(crate) mod monitor;
pub(crate) mod organization;
pub(crate) mod page;
pub(crate) mod project;
pub(crate) mod results;
pub(crate) mod selector;
pub(crate) mod traits;

pub use credential::CredentialResource;
pub use error::{ResourceError, Result as ResourceResult};
pub use monitor::JobSource;
pub use organization::OrganizationResource;
pub use page::ResultPage;
pub use project::ProjectResource;
pub use results::{
    AssociationOutcome, CreateOutcome, DeleteOutcome, MonitorOutcome, StatusOutcome, StatusSummary,
    TimeoutResult, UpdateOutcome, UpdateResult, WriteOutcome,
};
pub use selector::Selector;
pub use traits::{Associate, Create, Get, Modify};
