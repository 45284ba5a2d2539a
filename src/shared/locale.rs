//! Supported UI locales

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::config::ConfigError;

/// One of the two languages the UI ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// The other locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Tr,
            Locale::Tr => Locale::En,
        }
    }

    /// Map a POSIX locale string (`tr_TR.UTF-8`, `en-US`, `C`) to a supported
    /// locale by its language prefix. Anything unknown falls back to English.
    pub fn from_posix(value: &str) -> Self {
        let language = value
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if language == "tr" {
            Locale::Tr
        } else {
            Locale::En
        }
    }

    /// Detect the locale from `LC_ALL`, then `LANG`.
    pub fn from_environment() -> Self {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_posix(&value))
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}
