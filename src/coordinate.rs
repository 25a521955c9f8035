//! Artifact coordinate parsing

use std::fmt;

/// Packaging type used when the coordinate does not name one
pub const DEFAULT_TYPE: &str = "jar";

/// Identifier tuple naming a published artifact
///
/// Built from a colon-delimited string such as `org.example:foo:war:sources`.
/// Group and artifact may be absent when the input has fewer parts; the
/// resolver decides what an incomplete coordinate means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinate {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub artifact_type: String,
    pub classifier: Option<String>,
}

impl ArtifactCoordinate {
    /// Parse a coordinate string
    ///
    /// Parts beyond the fourth are ignored. Trailing empty parts are dropped
    /// before indexing, so `g:a::` parses like `g:a`.
    pub fn parse(raw: &str) -> Self {
        let mut parts: Vec<&str> = raw.split(':').collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }

        let part = |index: usize| parts.get(index).map(|p| p.to_string());

        Self {
            group: part(0),
            artifact: part(1),
            artifact_type: part(2).unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            classifier: part(3),
        }
    }

    /// Returns group and artifact when both are present and non-empty
    pub fn group_and_artifact(&self) -> Option<(&str, &str)> {
        match (self.group.as_deref(), self.artifact.as_deref()) {
            (Some(group), Some(artifact)) if !group.is_empty() && !artifact.is_empty() => {
                Some((group, artifact))
            }
            _ => None,
        }
    }
}

/// Renders `group:artifact:type`; absent parts render as empty strings
impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group.as_deref().unwrap_or_default(),
            self.artifact.as_deref().unwrap_or_default(),
            self.artifact_type
        )
    }
}
