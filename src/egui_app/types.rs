/**
 * Shared Types Module
 *
 * Defines the navigation routes and the signed-in user record.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Navigation destination, one per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign in form, entry point when signed out
    SignIn,
    /// Registration form
    SignUp,
    /// Password reset request form
    ForgotPassword,
    /// Signed-in landing screen
    Home,
}

impl Route {
    /// Whether this route belongs to the signed-in group
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::SignIn => write!(f, "SignIn"),
            Route::SignUp => write!(f, "SignUp"),
            Route::ForgotPassword => write!(f, "ForgotPassword"),
            Route::Home => write!(f, "Home"),
        }
    }
}

/// User information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}
