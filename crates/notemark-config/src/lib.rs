//! Configuration management for notemark.
//!
//! Parses `notemark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `render.locale`
//! - `localization.dir` (also expands a leading `~`)

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the document locale.
    pub locale: Option<String>,
    /// Override the localization directory.
    pub localization_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "notemark.toml";

/// Locale used when neither the config file nor the CLI sets one.
const DEFAULT_LOCALE: &str = "en-US";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Localization configuration (paths are relative strings from TOML).
    localization: LocalizationConfigRaw,

    /// Resolved localization configuration (set after loading).
    #[serde(skip)]
    pub localization_resolved: LocalizationConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Locale used to match notecard labels.
    pub locale: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

/// Raw localization configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LocalizationConfigRaw {
    dir: Option<String>,
}

/// Resolved localization configuration with absolute paths.
#[derive(Debug, Default)]
pub struct LocalizationConfig {
    /// Directory of `<locale>.json` label catalogs.
    ///
    /// `None` means the built-in English labels are used.
    pub dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`localization.dir`").
        field: String,
        /// Error message (e.g., "${`L10N_DIR`} not set").
        message: String,
    },
}

/// Check that `locale` looks like a BCP-47 tag: a 2-3 letter language
/// subtag followed by alphanumeric subtags separated by `-`.
fn require_locale(locale: &str, field: &str) -> Result<(), ConfigError> {
    if locale.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }

    let mut subtags = locale.split('-');
    let language_ok = subtags.next().is_some_and(|lang| {
        (2..=3).contains(&lang.len()) && lang.bytes().all(|b| b.is_ascii_alphabetic())
    });
    let rest_ok =
        subtags.all(|tag| !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_alphanumeric()));

    if !language_ok || !rest_ok {
        return Err(ConfigError::Validation(format!(
            "{field} is not a valid locale tag: {locale:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `notemark.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged result
    /// is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(locale) = &settings.locale {
            self.render.locale.clone_from(locale);
        }
        if let Some(dir) = &settings.localization_dir {
            self.localization_resolved.dir = Some(dir.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_locale(&self.render.locale, "render.locale")?;

        if let Some(dir) = &self.localization_resolved.dir
            && !dir.is_dir()
        {
            return Err(ConfigError::Validation(format!(
                "localization.dir does not exist: {}",
                dir.display()
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.render.locale = expand::expand_env(&self.render.locale, "render.locale")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let dir = match &self.localization.dir {
            Some(raw) => Some(config_dir.join(expand::expand_path(raw, "localization.dir")?)),
            None => None,
        };
        self.localization_resolved = LocalizationConfig { dir };
        Ok(())
    }
}
