use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use super::types::Config;
use crate::{CompatError, Result};

/// File name looked up in the user configuration directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

const MIN_STYLE_WIDTH: u16 = 20;

/// Loads and validates the YAML configuration
pub struct ConfigLoader {
    /// Directory searched when no explicit path is given
    search_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader searching the platform configuration directory
    pub fn new() -> Self {
        Self {
            search_dir: project_dirs().map(|dirs| dirs.config_dir().to_path_buf()),
        }
    }

    /// Loader searching `dir` instead of the platform directory
    pub fn with_search_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            search_dir: Some(dir.into()),
        }
    }

    /// Load from `explicit` when given, else from the search directory, else defaults
    pub fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        match self.search_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)) {
            Some(path) if path.exists() => self.load_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load a configuration file from path
    pub fn load_file(&self, path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CompatError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Config = serde_yaml_ng::from_str(&contents).map_err(|e| {
            CompatError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        validate(&config)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject configurations the wizard cannot render
pub fn validate(config: &Config) -> Result<()> {
    if config.report.metric_width == 0 || config.report.value_width == 0 {
        return Err(CompatError::Config(
            "report column widths must be greater than zero".to_string(),
        ));
    }

    if config.style.width < MIN_STYLE_WIDTH {
        return Err(CompatError::Config(format!(
            "style width must be at least {}, got {}",
            MIN_STYLE_WIDTH, config.style.width
        )));
    }

    if let Some(repo) = config.implementations.iter().find(|r| r.url.trim().is_empty()) {
        return Err(CompatError::Config(format!(
            "implementation '{}' has an empty url",
            repo.name
        )));
    }

    Ok(())
}

/// Platform directories for this tool
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "compat-base")
}
