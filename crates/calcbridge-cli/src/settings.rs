//! Effective settings for one invocation
//!
//! Loads the layered configuration (global file, calcbridge.toml, CALCBRIDGE_*
//! variables), lets command-line flags override it, and builds the backend.

use anyhow::{Context, Result};
use calcbridge_config::{Config, ConfigLoader};
use calcbridge_ffi::{Arithmetic, BackendKind, Checked, LibraryLoader, Linked};
use std::path::Path;
use tracing::debug;

/// Load configuration from an explicit file, or by searching from the working directory
pub fn load(config_file: Option<&Path>) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    let config = match config_file {
        Some(path) => loader
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            loader
                .load_from_directory(&cwd)
                .context("Failed to load configuration")?
        }
    };
    Ok(config)
}

/// Record the effective settings; call once tracing is installed
pub fn log_loaded(config: &Config) {
    debug!(
        backend = config.backend_kind(),
        library = config.library(),
        log_level = config.log_level(),
        json = config.json(),
        project_root = ?config.project_root(),
        "configuration loaded"
    );
}

/// Command-line flags win over every configuration layer
pub fn apply_backend_flags(
    config: &mut Config,
    backend: Option<BackendKind>,
    library: Option<String>,
) {
    if backend.is_none() && library.is_none() {
        return;
    }
    let section = config.settings.backend.get_or_insert_with(Default::default);
    if let Some(kind) = backend {
        section.kind = Some(kind.as_str().to_string());
    }
    if let Some(library) = library {
        section.library = Some(library);
    }
}

/// Construct the backend the configuration asks for
pub fn build_backend(config: &Config) -> Result<Box<dyn Arithmetic>> {
    let kind: BackendKind = config
        .backend_kind()
        .parse()
        .map_err(anyhow::Error::msg)?;

    match kind {
        BackendKind::Linked => Ok(Box::new(Linked)),
        BackendKind::Checked => Ok(Box::new(Checked)),
        BackendKind::Dynamic => {
            let name = config
                .library()
                .context("the dynamic backend needs a library (--library or CALCBRIDGE_LIBRARY)")?;

            let mut loader = LibraryLoader::new();
            // add_search_path prepends, so walk backwards to keep the configured order
            for path in config.search_paths().into_iter().rev() {
                loader.add_search_path(path);
            }

            let library = loader
                .open(name)
                .with_context(|| format!("Failed to open native library '{}'", name))?;
            Ok(Box::new(library))
        }
    }
}
