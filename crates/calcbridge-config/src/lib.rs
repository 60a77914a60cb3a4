//! calcbridge configuration
//!
//! Settings come from, in increasing priority:
//! 1. Global config (~/.calcbridge/config.toml)
//! 2. Project config (calcbridge.toml, searched upwards from the working directory)
//! 3. Environment variables (CALCBRIDGE_*)
//! 4. CLI flags (applied by the caller)
//!
//! # Example
//!
//! ```no_run
//! use calcbridge_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("backend: {}", config.backend_kind());
//! ```

pub mod global;
pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required field '{field}': {reason}")]
    MissingField { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Accepted values for `backend.kind`
pub const BACKEND_KINDS: &[&str] = &["linked", "dynamic", "checked"];

/// Accepted values for `logging.level`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

pub use global::GlobalConfig;
pub use loader::{Config, ConfigLoader};
pub use project::{BackendConfig, LoggingConfig, OutputConfig, ProjectConfig};
