//! Project Configuration (calcbridge.toml)

use crate::{ConfigError, ConfigResult, BACKEND_KINDS, LOG_LEVELS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project configuration from calcbridge.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Which arithmetic backend to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,

    /// Log verbosity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

/// `[backend]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// "linked", "dynamic" or "checked"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Shared library name or path (dynamic backend)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    /// Extra directories searched for the shared library
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<PathBuf>,
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// "error", "warn", "info", "debug" or "trace"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit JSON records instead of plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::TomlParseError { error, .. } => ConfigError::TomlParseError {
                file: path.to_path_buf(),
                error,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: PathBuf::new(),
            error: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values without looking at other layers
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(kind) = self.backend.as_ref().and_then(|b| b.kind.as_deref()) {
            validate_choice("backend.kind", kind, BACKEND_KINDS)?;
        }
        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_choice("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(&mut self, other: &ProjectConfig) {
        if let Some(theirs) = &other.backend {
            let ours = self.backend.get_or_insert_with(Default::default);
            if theirs.kind.is_some() {
                ours.kind = theirs.kind.clone();
            }
            if theirs.library.is_some() {
                ours.library = theirs.library.clone();
            }
            if !theirs.search_paths.is_empty() {
                ours.search_paths = theirs.search_paths.clone();
            }
        }
        if let Some(level) = other.logging.as_ref().and_then(|l| l.level.clone()) {
            self.logging.get_or_insert_with(Default::default).level = Some(level);
        }
        if let Some(json) = other.output.as_ref().and_then(|o| o.json) {
            self.output.get_or_insert_with(Default::default).json = Some(json);
        }
    }
}

pub(crate) fn validate_choice(field: &str, value: &str, allowed: &[&str]) -> ConfigResult<()> {
    if !allowed.contains(&value) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be one of {}, got '{}'", allowed.join(", "), value),
        });
    }
    Ok(())
}
