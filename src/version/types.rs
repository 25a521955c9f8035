/// Version metadata published by a repository for one artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMetadata {
    /// Most recently deployed version, snapshots included
    pub latest: Option<String>,
    /// Most recently deployed non-snapshot version
    pub release: Option<String>,
    /// All versions in the order the repository lists them (oldest first)
    pub versions: Vec<String>,
}

impl ArtifactMetadata {
    pub fn new(versions: Vec<String>) -> Self {
        Self {
            versions,
            ..Self::default()
        }
    }

    pub fn with_markers(
        versions: Vec<String>,
        latest: Option<String>,
        release: Option<String>,
    ) -> Self {
        Self {
            latest,
            release,
            versions,
        }
    }
}
