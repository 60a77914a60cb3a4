//! Global Configuration (~/.calcbridge/config.toml)
//!
//! Same sections as `calcbridge.toml`; a project file overrides it field by
//! field.

use crate::project::ProjectConfig;
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct GlobalConfig {
    pub settings: ProjectConfig,
}

impl GlobalConfig {
    /// Load global configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        ProjectConfig::load_from_file(path).map(|settings| Self { settings })
    }

    /// Get the global config directory (~/.calcbridge)
    pub fn global_config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".calcbridge"))
    }

    /// Get the global config file path (~/.calcbridge/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        Ok(Self::global_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_global_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

        let global = GlobalConfig::load_from_file(&path).unwrap();
        assert_eq!(
            global.settings.logging.unwrap().level.as_deref(),
            Some("info")
        );
    }

    #[test]
    fn test_missing_global_config() {
        let dir = TempDir::new().unwrap();
        let result = GlobalConfig::load_from_file(&dir.path().join("config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_global_config_path_under_home() {
        if let Ok(path) = GlobalConfig::global_config_path() {
            assert!(path.ends_with(".calcbridge/config.toml"));
        }
    }
}
