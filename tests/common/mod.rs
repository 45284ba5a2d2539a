//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - App fixtures with short service delays
//! - Frame pumping helpers
//! - Custom assertion macros

pub mod assertions;
pub mod fixtures;

// Re-export commonly used utilities
pub use fixtures::*;
