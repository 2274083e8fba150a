//! Settings file.
//!
//! Settings are stored in TOML format at:
//! - Linux: `~/.config/create-tool/config.toml`
//! - macOS: `~/Library/Application Support/create-tool/config.toml`
//! - Windows: `%APPDATA%\create-tool\config.toml`
//!
//! Every key is optional and command-line flags take precedence.

use scaffold_core::cli::OutputFormat;
use scaffold_core::{Error, FailurePolicy, GeneratorConfig, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistent settings for `create-tool`.
///
/// # Examples
///
/// ```toml
/// [templates]
/// dir = "/opt/strategienavigator/templates"
///
/// [output]
/// default_path = "/home/dev/strategienavigator/src/js/components/tools"
/// on_error = "abort"
/// format = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Settings {
    /// Template settings
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Where templates are read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TemplateSettings {
    /// Template directory; the embedded templates are used when unset
    pub dir: Option<PathBuf>,
}

/// Where and how results are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory under which tools are created when `--path` is not given
    pub default_path: Option<PathBuf>,

    /// Failure policy when `--on-error` is not given
    pub on_error: Option<FailurePolicy>,

    /// Report format when `--format` is not given
    pub format: Option<OutputFormat>,
}

/// Returns the default settings file location, if the platform has one.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("create-tool").join("config.toml"))
}

impl Settings {
    /// Loads settings from `explicit` or from the default location.
    ///
    /// A missing default file yields the defaults. A missing explicit file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_settings_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("No settings file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::load_from(&path)
    }

    /// Loads settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&contents).map_err(|e: toml::de::Error| Error::ConfigError {
            message: format!("invalid settings in {}: {}", path.display(), e.message()),
        })
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid settings TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::ConfigError {
            message: format!("invalid settings: {}", e.message()),
        })
    }

    /// Merges command-line values over the file values.
    #[must_use]
    pub fn generator_config(
        &self,
        path: Option<PathBuf>,
        templates: Option<PathBuf>,
        on_error: Option<FailurePolicy>,
    ) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            template_dir: templates.or_else(|| self.templates.dir.clone()),
            output_root: path
                .or_else(|| self.output.default_path.clone())
                .unwrap_or(defaults.output_root),
            failure_policy: on_error
                .or(self.output.on_error)
                .unwrap_or(defaults.failure_policy),
        }
    }

    /// Returns the report format, preferring the command-line value.
    #[must_use]
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output.format).unwrap_or_default()
    }
}
