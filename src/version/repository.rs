//! Metadata source trait for fetching artifact versions from a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ArtifactMetadata;

/// Trait for fetching version metadata of one artifact from a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataSource: Send + Sync {
    /// Identifier of the repository, used in logs and errors
    fn repository_id(&self) -> &str;

    /// Fetches version metadata for an artifact
    ///
    /// # Returns
    /// * `Ok(ArtifactMetadata)` - Versions in published order plus repository markers
    /// * `Err(RegistryError::NotFound)` - The repository does not know the artifact
    /// * `Err(RegistryError)` - Any other fetch failure
    async fn fetch_metadata(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<ArtifactMetadata, RegistryError>;
}
