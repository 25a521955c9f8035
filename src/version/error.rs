use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure to obtain version information for a coordinate
#[derive(Debug, Error)]
pub enum VersionRetrievalError {
    #[error("Failed to retrieve versions of {coordinate} from repository '{repository}'")]
    Repository {
        repository: String,
        coordinate: String,
        #[source]
        source: RegistryError,
    },

    #[error("Version ranges are not supported: {0}")]
    UnsupportedRange(String),
}
