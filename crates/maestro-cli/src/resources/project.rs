use crate::client::Client;
use crate::resources::credential::CredentialResource;
use crate::resources::error::{ResourceError, Result};
use crate::resources::monitor::{self, JobSource};
use crate::resources::organization::OrganizationResource;
use crate::resources::page::ResultPage;
use crate::resources::results::{
    CreateOutcome, DeleteOutcome, MonitorOutcome, StatusOutcome, StatusSummary, UpdateOutcome,
    UpdateResult, WriteOutcome,
};
use crate::resources::selector::{self, Selector};
use crate::resources::traits::{Associate, Create, Get, Modify};

use async_trait::async_trait;
use log::{debug, info};
use maestro_core::{Project, ProjectFields, ProjectUpdate, RelatedLink};
use serde::Deserialize;
use std::time::Duration;

/// Operations on projects: lookups, writes, the update trigger, status
/// resolution, and the polling monitor.
pub struct ProjectResource {
    client: Client,
    organizations: OrganizationResource,
    credentials: CredentialResource,
    monitor_interval: Duration,
}

impl ProjectResource {
    pub fn new(client: Client, monitor_interval: Duration) -> Self {
        let organizations = OrganizationResource::new(client.clone());
        let credentials = CredentialResource::new(client.clone());
        Self {
            client,
            organizations,
            credentials,
            monitor_interval,
        }
    }

    pub async fn list(
        &self,
        name: Option<&str>,
        organization: Option<&Selector>,
    ) -> Result<ResultPage<Project>> {
        let organization = self.scope(organization).await?;
        let body = self.client.list_projects(name, organization).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Resolves a selector to exactly one project. An id selector is a
    /// direct fetch; a name selector is matched within the organization
    /// scope when one is given.
    pub async fn resolve(
        &self,
        selector: &Selector,
        organization: Option<&Selector>,
    ) -> Result<Project> {
        match selector {
            Selector::Id(id) => self.get_by_id(*id).await,
            Selector::Name(name) => {
                let organization = self.scope(organization).await?;
                let matches = self.find(Some(name), organization).await?;
                selector::exactly_one(matches, self.kind(), name)
            }
        }
    }

    /// Creates the project unless one with the same name already exists,
    /// then optionally monitors the update the server starts for it.
    pub async fn create(
        &self,
        fields: &ProjectFields,
        organization: Option<&Selector>,
        monitor: bool,
        timeout: Option<u64>,
    ) -> Result<CreateOutcome> {
        let written = Create::create(self, fields, organization).await?;
        if monitor {
            let outcome = self.monitor_updates(written.project.id, timeout).await?;
            return Ok(CreateOutcome::Monitored(outcome));
        }
        Ok(CreateOutcome::Written(written))
    }

    /// Triggers an SCM update for the project. The server is asked first
    /// whether the project is eligible; an ineligible project never
    /// receives the launch POST.
    pub async fn update(
        &self,
        selector: &Selector,
        organization: Option<&Selector>,
        monitor: bool,
        timeout: Option<u64>,
    ) -> Result<UpdateOutcome> {
        let project = self.resolve(selector, organization).await?;

        #[derive(Deserialize)]
        struct Eligibility {
            can_update: bool,
        }

        debug!("Checking whether project {} can be updated.", project.id);
        let body = self.client.can_update(project.id).await?;
        let eligibility: Eligibility = serde_json::from_value(body)?;
        if !eligibility.can_update {
            return Err(ResourceError::cannot_start_job("Cannot update project."));
        }

        info!("Launching an update for project {}.", project.id);
        self.client.launch_update(project.id).await?;

        if monitor {
            let outcome = self.monitor_updates(project.id, timeout).await?;
            return Ok(UpdateOutcome::Monitored(outcome));
        }
        Ok(UpdateOutcome::Triggered(UpdateResult { changed: true }))
    }

    /// Reports the status of the project's current update, or the full
    /// job record when `detail` is set.
    pub async fn status(
        &self,
        selector: &Selector,
        organization: Option<&Selector>,
        detail: bool,
    ) -> Result<StatusOutcome> {
        let project = self.resolve(selector, organization).await?;
        let job = self.current_update(project.id).await?;
        if detail {
            return Ok(StatusOutcome::Detail(job));
        }
        Ok(StatusOutcome::Summary(StatusSummary::from(&job)))
    }

    pub async fn delete(
        &self,
        selector: &Selector,
        organization: Option<&Selector>,
    ) -> Result<DeleteOutcome> {
        let project = self.resolve(selector, organization).await?;
        self.client.delete_project(project.id).await?;
        info!("Deleted project {}.", project.id);
        Ok(DeleteOutcome {
            changed: true,
            id: project.id,
        })
    }

    /// Picks the job that represents the project's current activity: a
    /// running update wins over the most recent finished one, and a
    /// project with neither has no status to report.
    pub async fn current_update(&self, project_id: i64) -> Result<ProjectUpdate> {
        let project = self.get_by_id(project_id).await?;

        let link = if let Some(current) = project.related.current() {
            debug!("A current update exists; retrieving it.");
            current
        } else if let Some(last) = project.related.last() {
            debug!("No current update; retrieving the last one.");
            last
        } else {
            return Err(ResourceError::not_found("No project updates exist."));
        };

        let link = RelatedLink::parse(link)?;
        let body = self.client.get_related(&link).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn credential_id(&self, selector: &Selector) -> Result<i64> {
        Ok(self.credentials.get_one(selector).await?.id)
    }

    async fn monitor_updates(
        &self,
        project_id: i64,
        timeout: Option<u64>,
    ) -> Result<MonitorOutcome> {
        monitor::run(self, project_id, timeout, self.monitor_interval).await
    }

    async fn scope(&self, organization: Option<&Selector>) -> Result<Option<i64>> {
        match organization {
            Some(org) => Ok(Some(self.organizations.get_one(org).await?.id)),
            None => Ok(None),
        }
    }

    async fn find(&self, name: Option<&str>, organization: Option<i64>) -> Result<Vec<Project>> {
        let body = self.client.list_projects(name, organization).await?;
        let page: ResultPage<Project> = serde_json::from_value(body)?;
        Ok(page.results)
    }
}

#[async_trait]
impl Get for ProjectResource {
    type Record = Project;

    fn kind(&self) -> &'static str {
        "project"
    }

    async fn get_by_id(&self, id: i64) -> Result<Project> {
        let body = self.client.get_project(id).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Project>> {
        self.find(Some(name), None).await
    }
}

#[async_trait]
impl Create for ProjectResource {
    async fn create(
        &self,
        fields: &ProjectFields,
        organization: Option<&Selector>,
    ) -> Result<WriteOutcome> {
        let organization = self.scope(organization).await?;

        // Identity for creation is the name, scoped to the organization
        // when one was given.
        let existing = match fields.name.as_deref() {
            Some(name) => {
                let matches = self.find(Some(name), organization).await?;
                selector::at_most_one(matches, self.kind(), name)?
            }
            None => None,
        };

        let (changed, project) = match existing {
            Some(project) => {
                debug!("Project {:?} already exists; skipping the write.", project.name);
                (false, project)
            }
            None => {
                let body = self.client.create_project(fields).await?;
                let project: Project = serde_json::from_value(body)?;
                info!("Created project {}.", project.id);
                (true, project)
            }
        };

        // Organization membership is set through the association endpoint,
        // never through the project body.
        if let Some(org) = organization {
            self.organizations.associate(org, project.id).await?;
        }

        Ok(WriteOutcome { changed, project })
    }
}

#[async_trait]
impl Modify for ProjectResource {
    async fn modify(&self, selector: &Selector, fields: &ProjectFields) -> Result<WriteOutcome> {
        let project = self.get_one(selector).await?;

        if !fields.differs_from(&project) {
            debug!("Project {} already matches; skipping the write.", project.id);
            return Ok(WriteOutcome {
                changed: false,
                project,
            });
        }

        let body = self.client.modify_project(project.id, fields).await?;
        let project: Project = serde_json::from_value(body)?;
        info!("Modified project {}.", project.id);
        Ok(WriteOutcome {
            changed: true,
            project,
        })
    }
}

#[async_trait]
impl JobSource for ProjectResource {
    async fn poll(&self, project_id: i64) -> Result<ProjectUpdate> {
        self.current_update(project_id).await
    }
}
