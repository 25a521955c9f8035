//! Repository implementations for fetching artifact metadata

pub mod maven;

pub use maven::MavenRepository;
