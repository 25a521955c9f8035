//! Version lookup layer
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Reporter   │────▶│   Resolver   │────▶│  Repository  │
//! │ (report.rs)  │     │   (chain)    │     │   (maven)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │   Selector   │     │   Metadata   │
//!                      │  (snapshot)  │     │   (parse)    │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: `VersionResolver` trait consumed by the reporter
//! - [`chain`]: `RepositoryChain`, the bundled resolver over ordered repositories
//! - [`repository`]: `MetadataSource` trait for fetching one artifact's metadata
//! - [`repositories`]: Concrete repository clients
//! - [`metadata`]: maven-metadata.xml parsing
//! - [`selector`]: Snapshot policy for picking the latest version
//! - [`error`]: Error types for repository and resolution failures
//! - [`types`]: `ArtifactMetadata`

pub mod chain;
pub mod error;
pub mod metadata;
pub mod repositories;
pub mod repository;
pub mod resolver;
pub mod selector;
pub mod types;
