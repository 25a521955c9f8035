//! Display the latest version of an artifact known to the configured repositories.
//!
//! # Modules
//!
//! - [`coordinate`]: Parsing of `group:artifact[:type[:classifier]]` coordinates
//! - [`report`]: The reporter that resolves a coordinate and prints one line
//! - [`version`]: Resolver seam and the repository metadata adapter behind it
//! - [`config`]: Configuration file and defaults
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod coordinate;
pub mod logging;
pub mod report;
pub mod version;
