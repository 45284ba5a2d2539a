use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, FileConfig};
use crate::shared::locale::Locale;

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "AUTHDECK_CONFIG";

/// Environment variable forcing the UI locale
pub const LOCALE_ENV: &str = "AUTHDECK_LOCALE";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            source: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, source: None })
    }

    /// Defaults, then the config file if one exists, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);
        let locale = std::env::var(LOCALE_ENV).ok();
        Self::load_from(path.as_deref(), locale.as_deref())
    }

    /// [`Config::load`] with explicit inputs. A missing file is not an error.
    pub fn load_from(path: Option<&Path>, locale_override: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        let mut source = None;

        if let Some(path) = path.filter(|p| p.exists()) {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            builder = builder.merge_file(FileConfig::from_toml(&text)?);
            source = Some(path.to_path_buf());
        }

        if let Some(value) = locale_override.filter(|v| !v.trim().is_empty()) {
            builder = builder.locale(value.parse()?);
        }

        let app = builder.build()?;
        Ok(Self { app, source })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// File the configuration was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Configured locale, or the one detected from the environment
    pub fn initial_locale(&self) -> Locale {
        self.app.locale.unwrap_or_else(Locale::from_environment)
    }

    pub fn log_filter(&self) -> &str {
        &self.app.log_filter
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("authdeck").join("config.toml"))
}
