//! Configuration for bindkit helpers.
//!
//! The helpers are usable without any configuration. A config file only
//! changes defaults that the [`Toolkit`](crate::Toolkit) facade applies, such
//! as the date format used by `format_date` and the `time_ago` fallback.
//!
//! ## File Location
//!
//! - Linux: `~/.config/bindkit/config.toml`
//! - macOS: `~/Library/Application Support/dev.bindkit.bindkit/config.toml`
//! - Windows: `%APPDATA%\bindkit\bindkit\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [format]
//! date_format = "DD.MM.YYYY"
//! ```
//!
//! ## Loading
//!
//! ```rust,no_run
//! use bindkit_core::Config;
//!
//! let config = Config::load()?;
//! println!("Dates render as {}", config.format.date_format);
//! # Ok::<(), bindkit_core::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::date::DEFAULT_DATE_FORMAT;
use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Formatting defaults
    pub format: FormatConfig,
}

/// Formatting defaults applied by the [`Toolkit`](crate::Toolkit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Token format for dates (`YYYY`, `MM`, `DD`).
    ///
    /// Only the first occurrence of each token is substituted.
    pub date_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the config directory cannot be determined,
    /// otherwise the errors of [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the path exists but cannot be read (a directory,
    ///   missing permissions)
    /// - [`Error::Serialization`] if the file is not valid TOML
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the config directory cannot be determined,
    /// otherwise the errors of [`Config::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if a parent directory cannot be created or the file
    ///   cannot be written
    /// - [`Error::Serialization`] if the config cannot be encoded as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Path of the global configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the platform has no resolvable home
    /// directory.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "bindkit", "bindkit")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
