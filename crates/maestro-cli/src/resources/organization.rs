use crate::client::Client;
use crate::resources::error::Result;
use crate::resources::page::ResultPage;
use crate::resources::results::AssociationOutcome;
use crate::resources::traits::{Associate, Get};

use async_trait::async_trait;
use log::debug;
use maestro_core::Organization;
use serde::Deserialize;

/// Resource-level operations on organizations.
pub struct OrganizationResource {
    client: Client,
}

impl OrganizationResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Get for OrganizationResource {
    type Record = Organization;

    fn kind(&self) -> &'static str {
        "organization"
    }

    async fn get_by_id(&self, id: i64) -> Result<Organization> {
        let body = self.client.get_organization(id).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Organization>> {
        let body = self.client.list_organizations(Some(name)).await?;
        let page: ResultPage<Organization> = serde_json::from_value(body)?;
        Ok(page.results)
    }
}

#[async_trait]
impl Associate for OrganizationResource {
    async fn associate(&self, owner_id: i64, child_id: i64) -> Result<AssociationOutcome> {
        // The probe body only needs the count
        #[derive(Deserialize)]
        struct MembershipPage {
            count: i64,
        }

        debug!(
            "Checking whether project {} already belongs to organization {}.",
            child_id, owner_id
        );
        let body = self
            .client
            .list_organization_projects(owner_id, child_id)
            .await?;
        let membership: MembershipPage = serde_json::from_value(body)?;

        if membership.count > 0 {
            return Ok(AssociationOutcome { changed: false });
        }

        debug!("Adding project {} to organization {}.", child_id, owner_id);
        self.client.associate_project(owner_id, child_id).await?;

        Ok(AssociationOutcome { changed: true })
    }
}
