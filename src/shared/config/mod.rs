//! Application configuration module
//!
//! Provides configuration types for the application.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::shared::locale::Locale;

/// Default simulated sign-in latency
pub const DEFAULT_SIGN_IN_DELAY: Duration = Duration::from_millis(1500);

/// Default simulated registration latency
pub const DEFAULT_SIGN_UP_DELAY: Duration = Duration::from_millis(2000);

/// Default simulated password-reset latency
pub const DEFAULT_PASSWORD_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "authdeck=info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Forced UI locale; detected from the environment when `None`
    pub locale: Option<Locale>,
    /// Latency of the simulated sign-in call
    pub sign_in_delay: Duration,
    /// Latency of the simulated registration call
    pub sign_up_delay: Duration,
    /// Latency of the simulated password-reset call
    pub password_reset_delay: Duration,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            sign_in_delay: DEFAULT_SIGN_IN_DELAY,
            sign_up_delay: DEFAULT_SIGN_UP_DELAY,
            password_reset_delay: DEFAULT_PASSWORD_RESET_DELAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, delay) in [
            ("sign_in_delay", self.sign_in_delay),
            ("sign_up_delay", self.sign_up_delay),
            ("password_reset_delay", self.password_reset_delay),
        ] {
            if delay.is_zero() {
                return Err(ConfigError::ZeroDelay(name));
            }
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::MissingValue("log_filter"));
        }
        Ok(())
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub locale: Option<Locale>,
    pub sign_in_delay_ms: Option<u64>,
    pub sign_up_delay_ms: Option<u64>,
    pub password_reset_delay_ms: Option<u64>,
    pub log_filter: Option<String>,
}

impl FileConfig {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    locale: Option<Locale>,
    sign_in_delay: Option<Duration>,
    sign_up_delay: Option<Duration>,
    password_reset_delay: Option<Duration>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    /// Force the UI locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set the simulated sign-in latency
    pub fn sign_in_delay(mut self, delay: Duration) -> Self {
        self.sign_in_delay = Some(delay);
        self
    }

    /// Set the simulated registration latency
    pub fn sign_up_delay(mut self, delay: Duration) -> Self {
        self.sign_up_delay = Some(delay);
        self
    }

    /// Set the simulated password-reset latency
    pub fn password_reset_delay(mut self, delay: Duration) -> Self {
        self.password_reset_delay = Some(delay);
        self
    }

    /// Use the same latency for every simulated call
    pub fn all_delays(self, delay: Duration) -> Self {
        self.sign_in_delay(delay)
            .sign_up_delay(delay)
            .password_reset_delay(delay)
    }

    /// Set the tracing filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Overlay the keys present in a config file
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(locale) = file.locale {
            self.locale = Some(locale);
        }
        if let Some(ms) = file.sign_in_delay_ms {
            self.sign_in_delay = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = file.sign_up_delay_ms {
            self.sign_up_delay = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = file.password_reset_delay_ms {
            self.password_reset_delay = Some(Duration::from_millis(ms));
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = Some(filter);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            locale: self.locale,
            sign_in_delay: self.sign_in_delay.unwrap_or(defaults.sign_in_delay),
            sign_up_delay: self.sign_up_delay.unwrap_or(defaults.sign_up_delay),
            password_reset_delay: self
                .password_reset_delay
                .unwrap_or(defaults.password_reset_delay),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
