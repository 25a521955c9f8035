//! Maven repository layout client
//!
//! Fetches `{base}/{group path}/{artifact}/maven-metadata.xml` over HTTP.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{RepositoryConfig, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::metadata::MetadataParser;
use crate::version::repository::MetadataSource;
use crate::version::types::ArtifactMetadata;

const METADATA_FILE: &str = "maven-metadata.xml";

/// Metadata source for a remote repository using the Maven layout
pub struct MavenRepository {
    id: String,
    client: reqwest::Client,
    base_url: String,
    parser: MetadataParser,
}

impl MavenRepository {
    /// Creates a client for the repository at `base_url`
    pub fn new(id: &str, base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        Ok(Self {
            id: id.to_string(),
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            parser: MetadataParser::new(),
        })
    }

    pub fn from_config(
        config: &RepositoryConfig,
        timeout: Duration,
    ) -> Result<Self, RegistryError> {
        Self::new(&config.id, &config.url, timeout)
    }

    fn metadata_url(&self, group: &str, artifact: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            group.replace('.', "/"),
            artifact,
            METADATA_FILE
        )
    }
}

fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

#[async_trait::async_trait]
impl MetadataSource for MavenRepository {
    fn repository_id(&self) -> &str {
        &self.id
    }

    async fn fetch_metadata(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<ArtifactMetadata, RegistryError> {
        let url = self.metadata_url(group, artifact);
        debug!("Fetching metadata from {}: {}", self.id, url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            return Err(RegistryError::NotFound(format!("{}:{}", group, artifact)));
        }

        if !status.is_success() {
            warn!("Repository {} returned status {}: {}", self.id, status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read metadata from {}: {}", self.id, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let metadata = self.parser.parse(&body)?;

        debug!(
            "Found {} versions for {}:{} in {}",
            metadata.versions.len(),
            group,
            artifact,
            self.id
        );

        Ok(metadata)
    }
}
