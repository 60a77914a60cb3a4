//! Configuration Loader
//!
//! Loads configuration from every layer and merges them with proper
//! precedence (global < project < environment < CLI flags).

use crate::global::GlobalConfig;
use crate::project::{validate_choice, ProjectConfig};
use crate::{ConfigError, ConfigResult, BACKEND_KINDS, LOG_LEVELS};
use std::env;
use std::path::{Path, PathBuf};

/// Project file name searched for in the working directory and its parents
pub const PROJECT_FILE: &str = "calcbridge.toml";

/// Configuration loader
pub struct ConfigLoader {
    /// Global config path; `None` means the default under the home directory
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Effective settings after merging every layer
    pub settings: ProjectConfig,

    /// Directory holding the calcbridge.toml that was used, if any
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Use a specific file as the global configuration
    pub fn with_global_config(path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: Some(path.into()),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find calcbridge.toml, layers it over the
    /// global config, then applies environment variable overrides.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project) = self.find_project_config(start_dir)?;
        self.assemble(project_root, project)
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project = ProjectConfig::load_from_file(config_path)?;
        let project_root = config_path.parent().map(|p| p.to_path_buf());
        self.assemble(project_root, project)
    }

    fn assemble(
        &mut self,
        project_root: Option<PathBuf>,
        project: ProjectConfig,
    ) -> ConfigResult<Config> {
        let mut settings = self.load_global_config()?.settings;
        settings.merge(&project);
        apply_env_overrides(&mut settings)?;

        Ok(Config {
            settings,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(PROJECT_FILE);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Load the global configuration; a missing file is an empty layer
    fn load_global_config(&mut self) -> ConfigResult<GlobalConfig> {
        let path = match &self.global_config_path {
            Some(path) => path.clone(),
            None => match GlobalConfig::global_config_path() {
                Ok(path) => {
                    self.global_config_path = Some(path.clone());
                    path
                }
                Err(ConfigError::HomeNotFound) => return Ok(GlobalConfig::default()),
                Err(e) => return Err(e),
            },
        };

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }
        GlobalConfig::load_from_file(&path)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply CALCBRIDGE_* environment variables on top of `settings`
///
/// - CALCBRIDGE_BACKEND: backend.kind
/// - CALCBRIDGE_LIBRARY: backend.library
/// - CALCBRIDGE_LOG: logging.level
/// - CALCBRIDGE_JSON: output.json ("1", "true", "yes")
fn apply_env_overrides(settings: &mut ProjectConfig) -> ConfigResult<()> {
    if let Ok(kind) = env::var("CALCBRIDGE_BACKEND") {
        let kind = kind.to_lowercase();
        validate_choice("CALCBRIDGE_BACKEND", &kind, BACKEND_KINDS)?;
        settings.backend.get_or_insert_with(Default::default).kind = Some(kind);
    }

    if let Ok(library) = env::var("CALCBRIDGE_LIBRARY") {
        settings.backend.get_or_insert_with(Default::default).library = Some(library);
    }

    if let Ok(level) = env::var("CALCBRIDGE_LOG") {
        let level = level.to_lowercase();
        validate_choice("CALCBRIDGE_LOG", &level, LOG_LEVELS)?;
        settings.logging.get_or_insert_with(Default::default).level = Some(level);
    }

    if let Ok(json) = env::var("CALCBRIDGE_JSON") {
        let json = matches!(json.to_lowercase().as_str(), "true" | "1" | "yes");
        settings.output.get_or_insert_with(Default::default).json = Some(json);
    }

    Ok(())
}

impl Config {
    /// Effective backend kind (default: "linked")
    pub fn backend_kind(&self) -> &str {
        self.settings
            .backend
            .as_ref()
            .and_then(|b| b.kind.as_deref())
            .unwrap_or("linked")
    }

    /// Shared library for the dynamic backend
    pub fn library(&self) -> Option<&str> {
        self.settings
            .backend
            .as_ref()
            .and_then(|b| b.library.as_deref())
    }

    /// Extra library search paths, relative ones resolved against the project root
    pub fn search_paths(&self) -> Vec<PathBuf> {
        let Some(backend) = &self.settings.backend else {
            return Vec::new();
        };
        backend
            .search_paths
            .iter()
            .map(|p| match &self.project_root {
                Some(root) if p.is_relative() => root.join(p),
                _ => p.clone(),
            })
            .collect()
    }

    /// Effective log level (default: "warn")
    pub fn log_level(&self) -> &str {
        self.settings
            .logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("warn")
    }

    /// Whether JSON output is on by default
    pub fn json(&self) -> bool {
        self.settings
            .output
            .as_ref()
            .and_then(|o| o.json)
            .unwrap_or(false)
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Cross-field checks that only make sense after merging
    pub fn validate(&self) -> ConfigResult<()> {
        if self.backend_kind() == "dynamic" && self.library().is_none() {
            return Err(ConfigError::MissingField {
                field: "backend.library".to_string(),
                reason: "required when backend.kind = \"dynamic\"".to_string(),
            });
        }
        Ok(())
    }
}
