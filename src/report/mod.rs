//! Latest version report
//!
//! Parses a coordinate, asks the resolver for the latest version and writes
//! one line describing the outcome.

pub mod sink;

use std::error::Error;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::coordinate::ArtifactCoordinate;
use crate::version::error::VersionRetrievalError;
use crate::version::resolver::VersionResolver;
use sink::ReportSink;

/// Outcome of one lookup
#[derive(Debug)]
pub enum VersionQueryResult {
    Found(String),
    NotFound,
    Failed(VersionRetrievalError),
}

pub fn found_line(coordinate: &ArtifactCoordinate, version: &str) -> String {
    format!("Latest version found - {}:{}", coordinate, version)
}

pub fn not_found_line(coordinate: &ArtifactCoordinate) -> String {
    format!("Artifact {} not found", coordinate)
}

/// Reports the latest version of a single artifact
///
/// Retrieval failures are logged and returned as [`VersionQueryResult::Failed`];
/// they never produce a report line.
pub struct ArtifactVersionReporter<S: ReportSink> {
    resolver: Arc<dyn VersionResolver>,
    sink: S,
    allow_snapshots: bool,
}

impl<S: ReportSink> ArtifactVersionReporter<S> {
    pub fn new(resolver: Arc<dyn VersionResolver>, sink: S, allow_snapshots: bool) -> Self {
        Self {
            resolver,
            sink,
            allow_snapshots,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Resolve `raw` (`group:artifact[:type[:classifier]]`) and report the result
    pub async fn run(&mut self, raw: &str) -> VersionQueryResult {
        let coordinate = ArtifactCoordinate::parse(raw);
        debug!(
            "Resolving latest version of {} (classifier: {:?}, snapshots: {})",
            coordinate, coordinate.classifier, self.allow_snapshots
        );

        let result = self
            .resolver
            .find_latest_version(&coordinate, None, self.allow_snapshots, false)
            .await;

        match result {
            Ok(Some(version)) => {
                self.emit(&found_line(&coordinate, &version));
                VersionQueryResult::Found(version)
            }
            Ok(None) => {
                self.emit(&not_found_line(&coordinate));
                VersionQueryResult::NotFound
            }
            Err(e) => {
                error!("{}", error_chain(&e));
                VersionQueryResult::Failed(e)
            }
        }
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = self.sink.report_line(line) {
            warn!("Failed to write report line: {}", e);
        }
    }
}

/// Formats an error followed by its sources, separated by `: `
fn error_chain(error: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(error), |&e| e.source())
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
