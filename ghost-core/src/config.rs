//! YAML configuration with an environment override.
//!
//! ```yaml
//! # ghost-id.yaml
//! mode: development          # or production
//! attribute: data-gh         # element attribute the selectors target
//! exclude_render_index: false
//! ```
//!
//! `GHOST_ID_ENV=production` forces production mode; any other value forces
//! development. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Mode;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ghost-id.yaml";

/// Environment variable that overrides [`GhostConfig::mode`].
pub const MODE_ENV_VAR: &str = "GHOST_ID_ENV";

/// Default identifier attribute placed on rendered elements.
pub const DEFAULT_ATTRIBUTE: &str = "data-gh";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    pub mode: Mode,
    pub attribute: String,
    /// Hash every entry as if it were the first render of its component.
    pub exclude_render_index: bool,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Development,
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            exclude_render_index: false,
        }
    }
}

impl GhostConfig {
    /// Load from `path`, falling back to defaults when the file is absent,
    /// then apply the environment override.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        Ok(config.with_env_override(std::env::var(MODE_ENV_VAR).ok().as_deref()))
    }

    /// [`load_at`](Self::load_at) on `ghost-id.yaml` in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(&PathBuf::from(CONFIG_FILE_NAME))
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply the value of `GHOST_ID_ENV`, if any.
    pub fn with_env_override(mut self, env_value: Option<&str>) -> Self {
        if let Some(value) = env_value {
            self.mode = if value.eq_ignore_ascii_case("production") {
                Mode::Production
            } else {
                Mode::Development
            };
        }
        self
    }
}
