//! Configuration module for larder
//!
//! Manages application configuration: where the recipe data lives and how
//! output is rendered. Configuration is stored in the user's config directory
//! (`~/.config/larder/config.toml` on Linux).

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the recipe data file
pub const RECIPES_ENV: &str = "LARDER_RECIPES";

/// Data file used when nothing else names one
pub const DEFAULT_RECIPES_FILE: &str = "recipes.json";

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LarderConfig {
    /// Recipe data file
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Colour tags and headings
    #[serde(default = "default_color")]
    pub color: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            recipes_path: None,
            quiet: false,
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl LarderConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("larder").join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Point the configuration at a recipe data file
    pub fn set_recipes_path(&mut self, path: PathBuf) {
        self.recipes_path = Some(path);
    }

    /// Resolve the recipe data file
    ///
    /// Order: explicit override (the `--recipes` flag), then `recipes_path`,
    /// then the `LARDER_RECIPES` environment variable, then `./recipes.json`.
    #[must_use]
    pub fn resolve_recipes_path(&self, explicit: Option<&Path>) -> PathBuf {
        self.resolve_with_env(explicit, std::env::var_os(RECIPES_ENV))
    }

    fn resolve_with_env(&self, explicit: Option<&Path>, env: Option<OsString>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.recipes_path.clone())
            .or_else(|| env.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECIPES_FILE))
    }
}
