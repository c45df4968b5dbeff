use crate::client::Client;
use crate::resources::error::Result;
use crate::resources::page::ResultPage;
use crate::resources::traits::Get;

use async_trait::async_trait;
use maestro_core::Credential;

/// Read-only lookups for credentials.
pub struct CredentialResource {
    client: Client,
}

impl CredentialResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Get for CredentialResource {
    type Record = Credential;

    fn kind(&self) -> &'static str {
        "credential"
    }

    async fn get_by_id(&self, id: i64) -> Result<Credential> {
        let body = self.client.get_credential(id).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Credential>> {
        let body = self.client.list_credentials(Some(name)).await?;
        let page: ResultPage<Credential> = serde_json::from_value(body)?;
        Ok(page.results)
    }
}
