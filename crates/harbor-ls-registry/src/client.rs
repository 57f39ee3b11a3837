//! Harbor v2.0 API client.
//!
//! This module provides the [`RegistryApi`] trait the scanner is written
//! against and [`RegistryClient`], its HTTP implementation.

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::model::{Artifact, ArtifactRecord, ProjectRecord, RepositoryRecord};

/// Read-only view of a registry's project / repository / artifact hierarchy.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Registry name used in log messages.
    fn registry(&self) -> &str;

    /// Lists the names of all visible projects.
    async fn list_projects(&self) -> Result<Vec<String>, RegistryError>;

    /// Lists the bare repository names of a project.
    async fn list_repositories(&self, project: &str) -> Result<Vec<String>, RegistryError>;

    /// Lists the artifacts of a repository, in registry order.
    async fn list_artifacts(
        &self,
        project: &str,
        repo: &str,
    ) -> Result<Vec<Artifact>, RegistryError>;
}

/// HTTP client for the Harbor v2.0 API.
///
/// Every request carries the same `Authorization: Basic` header, computed
/// once when the client is created. Only the first page of each listing is
/// read.
#[derive(Debug)]
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
    api_root: Url,
    authorization: HeaderValue,
}

impl RegistryClient {
    /// Creates a new registry client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use harbor_ls_registry::{RegistryClient, RegistryConfig};
    ///
    /// let config = RegistryConfig::new("harbor.example.com").with_credentials("admin", "secret");
    /// let client = RegistryClient::new(config)?;
    /// # Ok::<(), harbor_ls_registry::RegistryError>(())
    /// ```
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.validate()?;

        let api_root = Url::parse(&config.api_root()).map_err(|_| RegistryError::InvalidUrl {
            url: config.api_root(),
        })?;
        if api_root.cannot_be_a_base() {
            return Err(RegistryError::InvalidUrl {
                url: config.api_root(),
            });
        }

        let authorization = Self::basic_authorization(&config)?;
        let http = Self::build_http_client(&config)?;

        Ok(Self {
            config,
            http,
            api_root,
            authorization,
        })
    }

    /// Returns the registry configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Builds the URL of an API endpoint below `/api/v2.0`.
    ///
    /// Each segment is percent-encoded. Harbor expects a `/` inside a
    /// repository name to be encoded twice, so callers pass repository names
    /// through [`Self::repository_segment`] first.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_root.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn repository_segment(repo: &str) -> String {
        repo.replace('/', "%2F")
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RegistryError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(url.clone())
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| RegistryError::ConnectionFailed {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "Response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistryError::from_status(
                url.as_str(),
                status.as_u16(),
                message,
            ));
        }

        response
            .json()
            .await
            .map_err(|source| RegistryError::InvalidResponse {
                url: url.to_string(),
                source,
            })
    }

    /// Builds the HTTP client with proper configuration.
    fn build_http_client(config: &RegistryConfig) -> Result<reqwest::Client, RegistryError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(|e| RegistryError::ConnectionFailed {
            url: config.base_url.clone(),
            source: e,
        })
    }

    /// Encodes the configured credentials as a Basic authorization header.
    fn basic_authorization(config: &RegistryConfig) -> Result<HeaderValue, RegistryError> {
        let credentials = config
            .credentials
            .as_ref()
            .ok_or_else(|| RegistryError::InvalidConfig {
                message: "username and password are required".to_string(),
            })?;

        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", credentials.username, credentials.password));

        let mut value = HeaderValue::from_str(&format!("Basic {token}")).map_err(|_| {
            RegistryError::InvalidConfig {
                message: "Invalid credentials".to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl RegistryApi for RegistryClient {
    fn registry(&self) -> &str {
        &self.config.registry
    }

    async fn list_projects(&self) -> Result<Vec<String>, RegistryError> {
        let url = self.endpoint(&["projects"]);
        let records: Vec<ProjectRecord> = self.get_json(url).await?;
        Ok(records.into_iter().map(|record| record.name).collect())
    }

    async fn list_repositories(&self, project: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.endpoint(&["projects", project, "repositories"]);
        let records: Vec<RepositoryRecord> = self.get_json(url).await?;
        Ok(records
            .iter()
            .map(|record| record.bare_name().to_string())
            .collect())
    }

    async fn list_artifacts(
        &self,
        project: &str,
        repo: &str,
    ) -> Result<Vec<Artifact>, RegistryError> {
        let repo = Self::repository_segment(repo);
        let url = self.endpoint(&["projects", project, "repositories", &repo, "artifacts"]);
        let records: Vec<ArtifactRecord> = self.get_json(url).await?;
        Ok(records.into_iter().map(Artifact::from).collect())
    }
}
