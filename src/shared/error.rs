//! Shared Error Types
//!
//! Errors raised by the auth service and the state store. Field validation
//! does not go through this type; it is collected in
//! [`FormErrors`](crate::shared::validation::FormErrors) and shown inline.
//!
//! # Error Categories
//!
//! - `InvalidCredentials` - sign in rejected the email/password pair
//! - `Service` - the auth service failed for another reason
//! - `InvalidTransition` - a store action was dispatched from a state that
//!   does not accept it; the state is left untouched
//!
//! # Usage
//!
//! ```rust
//! use authdeck::shared::error::AuthError;
//!
//! let error = AuthError::invalid_transition("authenticated", "start login");
//! assert_eq!(error.to_string(), "Cannot start login while authenticated");
//! ```
use thiserror::Error;

/// Errors produced by the auth service and the auth store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email and password did not match a known account
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The auth service failed for a reason other than credentials
    #[error("Auth service error: {message}")]
    Service {
        /// Human-readable error message
        message: String,
    },

    /// A store action was dispatched from a state that does not accept it
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        /// Phase the store was in
        from: &'static str,
        /// Action that was rejected
        action: &'static str,
    },
}

impl AuthError {
    /// Create a new service error
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Create a new invalid-transition error
    pub fn invalid_transition(from: &'static str, action: &'static str) -> Self {
        Self::InvalidTransition { from, action }
    }
}
