use crate::{CliClientResult, ClientError};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use maestro_core::{ProjectFields, RelatedLink};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the Maestro REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://127.0.0.1:8052")
    /// * `timeout` - Per-request timeout, so a dead server cannot hang a poll
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request against the API base
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // DELETE and association responses may have no body at all
        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(body) => body,
                // A failed response may carry a non-JSON body (a proxy
                // error page); the status line is the useful signal then
                Err(_) if !status.is_success() => Value::Null,
                Err(err) => return Err(ClientError::from_json(err)),
            }
        };

        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(ClientError::Api {
                    code,
                    message,
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            return Err(ClientError::api_error(
                status.as_str().to_string(),
                format!("request failed with status {}", status),
            ));
        }

        Ok(body)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List projects, optionally filtered by name and organization
    pub async fn list_projects(
        &self,
        name: Option<&str>,
        organization: Option<i64>,
    ) -> CliClientResult<Value> {
        let mut req = self.request(Method::GET, "/api/v1/projects/");

        if let Some(name) = name {
            req = req.query(&[("name", name)]);
        }
        if let Some(organization) = organization {
            req = req.query(&[("organization", organization)]);
        }

        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/projects/{}/", id));
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(&self, fields: &ProjectFields) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/projects/").json(fields);
        self.execute(req).await
    }

    /// Patch the given fields of an existing project
    pub async fn modify_project(
        &self,
        id: i64,
        fields: &ProjectFields,
    ) -> CliClientResult<Value> {
        let req = self
            .request(Method::PATCH, &format!("/api/v1/projects/{}/", id))
            .json(fields);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/projects/{}/", id));
        self.execute(req).await
    }

    // =========================================================================
    // Update Job Operations
    // =========================================================================

    /// Ask whether a project may start an SCM update right now
    pub async fn can_update(&self, project_id: i64) -> CliClientResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/api/v1/projects/{}/update/", project_id),
        );
        self.execute(req).await
    }

    /// Launch an SCM update for a project
    pub async fn launch_update(&self, project_id: i64) -> CliClientResult<Value> {
        let req = self.request(
            Method::POST,
            &format!("/api/v1/projects/{}/update/", project_id),
        );
        self.execute(req).await
    }

    /// Fetch the record behind a parsed related link
    pub async fn get_related(&self, link: &RelatedLink) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/{}/{}/", link.kind, link.id));
        self.execute(req).await
    }

    // =========================================================================
    // Organization Operations
    // =========================================================================

    /// List organizations, optionally filtered by name
    pub async fn list_organizations(&self, name: Option<&str>) -> CliClientResult<Value> {
        let mut req = self.request(Method::GET, "/api/v1/organizations/");

        if let Some(name) = name {
            req = req.query(&[("name", name)]);
        }

        self.execute(req).await
    }

    /// Get an organization by ID
    pub async fn get_organization(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/organizations/{}/", id));
        self.execute(req).await
    }

    /// Probe an organization's project collection for one project
    pub async fn list_organization_projects(
        &self,
        organization_id: i64,
        project_id: i64,
    ) -> CliClientResult<Value> {
        let req = self
            .request(
                Method::GET,
                &format!("/api/v1/organizations/{}/projects/", organization_id),
            )
            .query(&[("id", project_id)]);
        self.execute(req).await
    }

    /// Add a project to an organization's project collection
    pub async fn associate_project(
        &self,
        organization_id: i64,
        project_id: i64,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct AssociateRequest {
            id: i64,
            associate: bool,
        }

        let body = AssociateRequest {
            id: project_id,
            associate: true,
        };
        let req = self
            .request(
                Method::POST,
                &format!("/api/v1/organizations/{}/projects/", organization_id),
            )
            .json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Credential Operations
    // =========================================================================

    /// List credentials, optionally filtered by name
    pub async fn list_credentials(&self, name: Option<&str>) -> CliClientResult<Value> {
        let mut req = self.request(Method::GET, "/api/v1/credentials/");

        if let Some(name) = name {
            req = req.query(&[("name", name)]);
        }

        self.execute(req).await
    }

    /// Get a credential by ID
    pub async fn get_credential(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/credentials/{}/", id));
        self.execute(req).await
    }
}
