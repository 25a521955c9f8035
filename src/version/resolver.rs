//! Latest version resolver seam
//!
//! The reporter only knows this trait. Everything about repositories,
//! metadata and snapshot policy lives behind it.

use async_trait::async_trait;

use crate::coordinate::ArtifactCoordinate;
use crate::version::error::VersionRetrievalError;

/// Looks up the latest version of an artifact
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Find the latest version matching the coordinate
    ///
    /// # Arguments
    /// * `coordinate` - Artifact to look up; group or artifact may be absent
    /// * `version_range` - Optional restriction on acceptable versions
    /// * `allow_snapshots` - Whether snapshot versions may be returned
    /// * `quiet` - Suppress progress logging
    ///
    /// # Returns
    /// * `Ok(Some(version))` - Latest matching version
    /// * `Ok(None)` - No matching version exists
    /// * `Err(VersionRetrievalError)` - Repository metadata could not be retrieved
    async fn find_latest_version(
        &self,
        coordinate: &ArtifactCoordinate,
        version_range: Option<&str>,
        allow_snapshots: bool,
        quiet: bool,
    ) -> Result<Option<String>, VersionRetrievalError>;
}
