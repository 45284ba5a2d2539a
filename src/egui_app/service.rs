//! Auth Service
//!
//! The boundary between the screens and whatever answers their requests.
//! [`SimulatedAuthService`] stands in for a backend: it waits for the
//! configured latency and answers from a fixed demo account.

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use uuid::Uuid;

use crate::egui_app::types::User;
use crate::shared::config::AppConfig;
use crate::shared::error::AuthError;

/// Email of the only account the simulated service accepts
pub const DEMO_EMAIL: &str = "test@test.com";
/// Password of the demo account
pub const DEMO_PASSWORD: &str = "123456";
/// Display name of the demo account
pub const DEMO_NAME: &str = "Test User";
/// Id of the demo account
pub const DEMO_USER_ID: &str = "1";

/// Remote authentication operations used by the screens.
///
/// Futures are `'static + Send` so they can run on the task runner.
pub trait AuthService: Send + Sync {
    fn sign_in(&self, email: String, password: String) -> BoxFuture<'static, Result<User, AuthError>>;

    fn sign_up(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> BoxFuture<'static, Result<User, AuthError>>;

    fn request_password_reset(&self, email: String) -> BoxFuture<'static, Result<(), AuthError>>;
}

/// Latency-only stand-in for a real backend
#[derive(Debug, Clone)]
pub struct SimulatedAuthService {
    sign_in_delay: Duration,
    sign_up_delay: Duration,
    password_reset_delay: Duration,
}

impl SimulatedAuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sign_in_delay: config.sign_in_delay,
            sign_up_delay: config.sign_up_delay,
            password_reset_delay: config.password_reset_delay,
        }
    }
}

impl Default for SimulatedAuthService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AuthService for SimulatedAuthService {
    fn sign_in(&self, email: String, password: String) -> BoxFuture<'static, Result<User, AuthError>> {
        let delay = self.sign_in_delay;
        async move {
            tokio::time::sleep(delay).await;
            if email == DEMO_EMAIL && password == DEMO_PASSWORD {
                Ok(User::new(DEMO_USER_ID, email, DEMO_NAME))
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
        .boxed()
    }

    fn sign_up(
        &self,
        name: String,
        email: String,
        _password: String,
    ) -> BoxFuture<'static, Result<User, AuthError>> {
        let delay = self.sign_up_delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(User::new(Uuid::new_v4().to_string(), email, name.trim()))
        }
        .boxed()
    }

    fn request_password_reset(&self, _email: String) -> BoxFuture<'static, Result<(), AuthError>> {
        let delay = self.password_reset_delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(())
        }
        .boxed()
    }
}
