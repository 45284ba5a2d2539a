/**
 * Authentication Module
 *
 * Holds the single shared authentication record and the only actions
 * allowed to change it.
 */

use std::fmt;

use crate::egui_app::types::User;
use crate::shared::error::AuthError;

/// Phase derived from an [`AuthState`] snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Signed out, nothing in flight
    Anonymous,
    /// A sign in or sign up request is in flight
    Authenticating,
    /// A user is signed in
    Authenticated,
    /// The last attempt failed; `error` holds the message
    AuthError,
}

impl AuthPhase {
    fn as_str(self) -> &'static str {
        match self {
            AuthPhase::Anonymous => "anonymous",
            AuthPhase::Authenticating => "authenticating",
            AuthPhase::Authenticated => "authenticated",
            AuthPhase::AuthError => "auth error",
        }
    }
}

impl fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication state
///
/// `is_authenticated` is derived from the presence of a user, so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    is_loading: bool,
    error: Option<String>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> AuthPhase {
        if self.is_loading {
            AuthPhase::Authenticating
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else if self.error.is_some() {
            AuthPhase::AuthError
        } else {
            AuthPhase::Anonymous
        }
    }
}

/// Owner of the shared [`AuthState`].
///
/// Screens read snapshots through [`AuthStore::state`] and change it only
/// through the four actions. Each accepted action bumps the revision, which
/// the navigator watches to re-evaluate the reachable screens.
#[derive(Debug, Default)]
pub struct AuthStore {
    state: AuthState,
    revision: u64,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.phase()
    }

    /// Number of accepted actions so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `Anonymous | AuthError | Authenticating -> Authenticating`, clearing any error.
    pub fn login_start(&mut self) -> Result<(), AuthError> {
        let from = self.phase();
        if from == AuthPhase::Authenticated {
            return Err(self.reject(from, "start login"));
        }
        self.state.is_loading = true;
        self.state.error = None;
        self.commit(from);
        Ok(())
    }

    /// `Authenticating -> Authenticated`
    pub fn login_success(&mut self, user: User) -> Result<(), AuthError> {
        let from = self.phase();
        if from != AuthPhase::Authenticating {
            return Err(self.reject(from, "complete login"));
        }
        self.state.user = Some(user);
        self.state.is_loading = false;
        self.state.error = None;
        self.commit(from);
        Ok(())
    }

    /// `Authenticating -> AuthError`
    pub fn login_failure(&mut self, message: impl Into<String>) -> Result<(), AuthError> {
        let from = self.phase();
        if from != AuthPhase::Authenticating {
            return Err(self.reject(from, "fail login"));
        }
        self.state.user = None;
        self.state.is_loading = false;
        self.state.error = Some(message.into());
        self.commit(from);
        Ok(())
    }

    /// Reset to `Anonymous` from any phase.
    pub fn logout(&mut self) {
        let from = self.phase();
        self.state = AuthState::default();
        self.commit(from);
    }

    fn commit(&mut self, from: AuthPhase) {
        self.revision += 1;
        tracing::debug!(
            "[AUTH] {} -> {} (revision {})",
            from,
            self.phase(),
            self.revision
        );
    }

    fn reject(&self, from: AuthPhase, action: &'static str) -> AuthError {
        tracing::warn!("[AUTH] rejected '{}' while {}", action, from);
        AuthError::invalid_transition(from.as_str(), action)
    }
}
