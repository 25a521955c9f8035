//! Resolver over an ordered list of repositories

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::coordinate::ArtifactCoordinate;
use crate::version::error::{RegistryError, VersionRetrievalError};
use crate::version::repositories::MavenRepository;
use crate::version::repository::MetadataSource;
use crate::version::resolver::VersionResolver;
use crate::version::selector::select_latest;

/// Resolves the latest version by asking each repository in order
///
/// The first repository that lists an eligible version wins. A repository
/// that does not know the artifact is skipped; any other failure aborts the
/// lookup.
pub struct RepositoryChain {
    sources: Vec<Arc<dyn MetadataSource>>,
}

impl RepositoryChain {
    pub fn new(sources: Vec<Arc<dyn MetadataSource>>) -> Self {
        Self { sources }
    }

    /// Build a chain of Maven repositories from the configured list
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let timeout = Duration::from_millis(config.fetch_timeout_ms);
        let sources = config
            .repositories
            .iter()
            .map(|repository| {
                MavenRepository::from_config(repository, timeout)
                    .map(|source| Arc::new(source) as Arc<dyn MetadataSource>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(sources))
    }

    #[cfg(test)]
    fn sources(&self) -> &[Arc<dyn MetadataSource>] {
        &self.sources
    }
}

#[async_trait]
impl VersionResolver for RepositoryChain {
    async fn find_latest_version(
        &self,
        coordinate: &ArtifactCoordinate,
        version_range: Option<&str>,
        allow_snapshots: bool,
        quiet: bool,
    ) -> Result<Option<String>, VersionRetrievalError> {
        if let Some(range) = version_range {
            return Err(VersionRetrievalError::UnsupportedRange(range.to_string()));
        }

        let Some((group, artifact)) = coordinate.group_and_artifact() else {
            warn!(
                "Coordinate {} lacks a group or artifact id; nothing to look up",
                coordinate
            );
            return Ok(None);
        };

        for source in &self.sources {
            let repository = source.repository_id();
            if quiet {
                debug!("Looking up {}:{} in {}", group, artifact, repository);
            } else {
                info!("Looking up {}:{} in {}", group, artifact, repository);
            }

            let metadata = match source.fetch_metadata(group, artifact).await {
                Ok(metadata) => metadata,
                Err(RegistryError::NotFound(_)) => {
                    debug!("{}:{} not present in {}", group, artifact, repository);
                    continue;
                }
                Err(error) => {
                    return Err(VersionRetrievalError::Repository {
                        repository: repository.to_string(),
                        coordinate: coordinate.to_string(),
                        source: error,
                    });
                }
            };

            if let Some(version) = select_latest(&metadata, allow_snapshots) {
                debug!("Selected {} from {}", version, repository);
                return Ok(Some(version));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepositoryConfig;
    use crate::version::repository::MockMetadataSource;
    use crate::version::types::ArtifactMetadata;

    fn versions(versions: &[&str]) -> ArtifactMetadata {
        ArtifactMetadata::new(versions.iter().map(|v| v.to_string()).collect())
    }

    fn source_returning(
        id: &str,
        result: fn() -> Result<ArtifactMetadata, RegistryError>,
    ) -> Arc<dyn MetadataSource> {
        let mut mock = MockMetadataSource::new();
        mock.expect_repository_id().return_const(id.to_string());
        mock.expect_fetch_metadata()
            .times(1)
            .returning(move |_, _| result());
        Arc::new(mock)
    }

    fn unused_source() -> Arc<dyn MetadataSource> {
        let mut mock = MockMetadataSource::new();
        mock.expect_repository_id().return_const("unused".to_string());
        mock.expect_fetch_metadata().never();
        Arc::new(mock)
    }

    #[test]
    fn from_config_keeps_repository_order() {
        let config = Config {
            repositories: vec![
                RepositoryConfig::from_arg("internal=https://maven.example.com"),
                RepositoryConfig::default(),
            ],
            ..Config::default()
        };

        let chain = RepositoryChain::from_config(&config).unwrap();

        let ids: Vec<&str> = chain.sources().iter().map(|s| s.repository_id()).collect();
        assert_eq!(ids, vec!["internal", "central"]);
    }

    #[tokio::test]
    async fn returns_version_from_first_repository_that_knows_the_artifact() {
        let chain = RepositoryChain::new(vec![
            source_returning("first", || {
                Err(RegistryError::NotFound("org.example:foo".to_string()))
            }),
            source_returning("second", || Ok(versions(&["1.0.0", "1.2.3"]))),
            unused_source(),
        ]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                None,
                false,
                false,
            )
            .await
            .unwrap();

        assert_eq!(result, Some("1.2.3".to_string()));
    }

    #[tokio::test]
    async fn passes_group_and_artifact_to_source() {
        let mut mock = MockMetadataSource::new();
        mock.expect_repository_id().return_const("central".to_string());
        mock.expect_fetch_metadata()
            .withf(|group, artifact| group == "org.example" && artifact == "foo")
            .times(1)
            .returning(|_, _| Ok(versions(&["2.0"])));
        let chain = RepositoryChain::new(vec![Arc::new(mock)]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo:war:sources"),
                None,
                false,
                true,
            )
            .await
            .unwrap();

        assert_eq!(result, Some("2.0".to_string()));
    }

    #[tokio::test]
    async fn skips_repository_with_only_snapshots_when_snapshots_disallowed() {
        let chain = RepositoryChain::new(vec![
            source_returning("snapshots", || Ok(versions(&["1.1-SNAPSHOT"]))),
            source_returning("releases", || Ok(versions(&["1.0"]))),
        ]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                None,
                false,
                false,
            )
            .await
            .unwrap();

        assert_eq!(result, Some("1.0".to_string()));
    }

    #[tokio::test]
    async fn returns_snapshot_when_allowed() {
        let chain = RepositoryChain::new(vec![source_returning("snapshots", || {
            Ok(versions(&["1.0", "1.1-SNAPSHOT"]))
        })]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                None,
                true,
                false,
            )
            .await
            .unwrap();

        assert_eq!(result, Some("1.1-SNAPSHOT".to_string()));
    }

    #[tokio::test]
    async fn returns_none_when_no_repository_knows_the_artifact() {
        let chain = RepositoryChain::new(vec![
            source_returning("first", || Err(RegistryError::NotFound("a".to_string()))),
            source_returning("second", || Err(RegistryError::NotFound("a".to_string()))),
        ]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                None,
                false,
                false,
            )
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn returns_none_without_repositories() {
        let chain = RepositoryChain::new(vec![]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                None,
                false,
                false,
            )
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn aborts_on_repository_failure() {
        let chain = RepositoryChain::new(vec![
            source_returning("broken", || {
                Err(RegistryError::InvalidResponse("Unexpected status: 500".to_string()))
            }),
            unused_source(),
        ]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                None,
                false,
                false,
            )
            .await;

        match result {
            Err(VersionRetrievalError::Repository {
                repository,
                coordinate,
                ..
            }) => {
                assert_eq!(repository, "broken");
                assert_eq!(coordinate, "org.example:foo:jar");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn incomplete_coordinate_is_not_looked_up() {
        let chain = RepositoryChain::new(vec![unused_source()]);

        let result = chain
            .find_latest_version(&ArtifactCoordinate::parse("org.example"), None, false, false)
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn rejects_version_range() {
        let chain = RepositoryChain::new(vec![unused_source()]);

        let result = chain
            .find_latest_version(
                &ArtifactCoordinate::parse("org.example:foo"),
                Some("[1.0,2.0)"),
                false,
                false,
            )
            .await;

        assert!(matches!(
            result,
            Err(VersionRetrievalError::UnsupportedRange(range)) if range == "[1.0,2.0)"
        ));
    }
}
