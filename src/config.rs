use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Timeout for a single metadata request in milliseconds (30 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

/// Repository used when none is configured
pub const DEFAULT_REPOSITORY_ID: &str = "central";
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo.maven.apache.org/maven2";

pub const USER_AGENT: &str = concat!("display-latest-version/", env!("CARGO_PKG_VERSION"));

const APP_DIR: &str = "display-latest-version";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid repository '{0}': url must start with http:// or https://")]
    InvalidRepository(String),

    #[error("No repositories configured")]
    NoRepositories,

    #[error("Fetch timeout must be greater than zero")]
    ZeroTimeout,
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Repositories to query, in order
    pub repositories: Vec<RepositoryConfig>,
    /// Whether snapshot versions may be reported
    pub allow_snapshots: bool,
    /// Timeout for a single metadata request in milliseconds
    pub fetch_timeout_ms: u64,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repositories: vec![RepositoryConfig::default()],
            allow_snapshots: false,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            output: OutputConfig::default(),
        }
    }
}

/// A remote repository
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepositoryConfig {
    pub id: String,
    pub url: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_REPOSITORY_ID.to_string(),
            url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Parse a command-line repository of the form `id=url` or `url`
    ///
    /// A bare url is also used as the repository id.
    pub fn from_arg(arg: &str) -> Self {
        match arg.split_once('=') {
            Some((id, url)) if !id.is_empty() && !id.contains(['/', ':']) => Self {
                id: id.to_string(),
                url: url.to_string(),
            },
            _ => Self {
                id: arg.to_string(),
                url: arg.to_string(),
            },
        }
    }
}

/// Optional file that mirrors the report lines
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
    /// Append to the file instead of truncating it
    pub append: bool,
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces the configured list when non-empty
    pub repositories: Vec<RepositoryConfig>,
    /// Only ever turns snapshots on
    pub allow_snapshots: bool,
    pub fetch_timeout_ms: Option<u64>,
    pub output_file: Option<PathBuf>,
    pub append: bool,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit file if given, else the default file if it exists,
    /// else the built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = config_path();
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if !overrides.repositories.is_empty() {
            self.repositories = overrides.repositories;
        }
        self.allow_snapshots |= overrides.allow_snapshots;
        if let Some(timeout) = overrides.fetch_timeout_ms {
            self.fetch_timeout_ms = timeout;
        }
        if overrides.output_file.is_some() {
            self.output.file = overrides.output_file;
        }
        self.output.append |= overrides.append;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repositories.is_empty() {
            return Err(ConfigError::NoRepositories);
        }

        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        match self
            .repositories
            .iter()
            .find(|r| !(r.url.starts_with("http://") || r.url.starts_with("https://")))
        {
            Some(invalid) => Err(ConfigError::InvalidRepository(invalid.url.clone())),
            None => Ok(()),
        }
    }
}

/// Returns the configuration directory.
/// Uses $XDG_CONFIG_HOME/display-latest-version if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/display-latest-version,
/// or ./display-latest-version if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_DIR)
}
