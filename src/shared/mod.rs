//! Shared Module
//!
//! UI-independent building blocks of the auth screens: error types,
//! configuration, locales and the form validation rules. Nothing in here
//! depends on egui, so it can be exercised directly from tests.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Supported UI locales
pub mod locale;

/// Field rules and per-form validation
pub mod validation;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, FileConfig};
pub use error::AuthError;
pub use locale::Locale;
pub use validation::{Field, FormErrors};
