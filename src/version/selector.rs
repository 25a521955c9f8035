//! Snapshot policy for picking the latest version out of repository metadata
//!
//! Versions are never compared here. The repository's own `latest` and
//! `release` markers are trusted first, then the published order (last item
//! is newest).

use crate::version::types::ArtifactMetadata;

/// Suffix that marks a mutable, unreleased version
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX)
}

/// Select the latest eligible version from metadata
///
/// With snapshots allowed, the `latest` marker wins, falling back to the last
/// listed version. Without snapshots, a non-snapshot `release` marker wins,
/// falling back to the last listed non-snapshot version.
pub fn select_latest(metadata: &ArtifactMetadata, allow_snapshots: bool) -> Option<String> {
    if allow_snapshots {
        return metadata
            .latest
            .clone()
            .or_else(|| metadata.versions.last().cloned());
    }

    if let Some(release) = &metadata.release
        && !is_snapshot(release)
    {
        return Some(release.clone());
    }

    metadata
        .versions
        .iter()
        .rev()
        .find(|v| !is_snapshot(v))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn metadata(
        latest: Option<&str>,
        release: Option<&str>,
        versions: &[&str],
    ) -> ArtifactMetadata {
        ArtifactMetadata::with_markers(
            versions.iter().map(|v| v.to_string()).collect(),
            latest.map(|s| s.to_string()),
            release.map(|s| s.to_string()),
        )
    }

    #[rstest]
    #[case("1.0.0-SNAPSHOT", true)]
    #[case("1.0.0", false)]
    #[case("1.0.0-snapshot", false)]
    #[case("SNAPSHOT", false)]
    fn is_snapshot_checks_suffix(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_snapshot(version), expected);
    }

    #[rstest]
    // release marker wins without snapshots
    #[case(Some("2.1-SNAPSHOT"), Some("2.0"), &["1.0", "2.0", "2.1-SNAPSHOT"], false, Some("2.0"))]
    // latest marker wins with snapshots
    #[case(Some("2.1-SNAPSHOT"), Some("2.0"), &["1.0", "2.0", "2.1-SNAPSHOT"], true, Some("2.1-SNAPSHOT"))]
    // no markers: last non-snapshot in published order
    #[case(None, None, &["1.0", "1.1", "1.2-SNAPSHOT"], false, Some("1.1"))]
    // no markers: last listed with snapshots
    #[case(None, None, &["1.0", "1.1", "1.2-SNAPSHOT"], true, Some("1.2-SNAPSHOT"))]
    // published order is trusted over numeric order
    #[case(None, None, &["2.0", "1.9"], false, Some("1.9"))]
    // snapshot release marker is ignored without snapshots
    #[case(None, Some("3.0-SNAPSHOT"), &["2.0", "3.0-SNAPSHOT"], false, Some("2.0"))]
    // only snapshots published
    #[case(Some("1.0-SNAPSHOT"), None, &["1.0-SNAPSHOT"], false, None)]
    #[case(None, None, &[], false, None)]
    #[case(None, None, &[], true, None)]
    fn select_latest_returns_expected(
        #[case] latest: Option<&str>,
        #[case] release: Option<&str>,
        #[case] versions: &[&str],
        #[case] allow_snapshots: bool,
        #[case] expected: Option<&str>,
    ) {
        let metadata = metadata(latest, release, versions);
        assert_eq!(
            select_latest(&metadata, allow_snapshots),
            expected.map(|s| s.to_string())
        );
    }
}
