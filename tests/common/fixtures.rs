//! App fixtures
//!
//! Contexts backed by the simulated service with millisecond delays, and a
//! helper that runs frames until a condition holds.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use authdeck::egui_app::{AppContext, AppState, AuthService, Config, User};
use authdeck::shared::config::AppConfig;
use authdeck::shared::error::AuthError;
use authdeck::shared::locale::Locale;

/// Service latency used by every fixture
pub const FAST_DELAY: Duration = Duration::from_millis(10);

/// Upper bound for [`run_until`]
pub const FRAME_TIMEOUT: Duration = Duration::from_secs(5);

pub fn fast_config(delay: Duration) -> Config {
    let builder = AppConfig::builder().locale(Locale::En).all_delays(delay);
    crate::assert_ok!(Config::with_builder(builder), "fixture config is valid")
}

/// English context on the simulated service
pub fn fast_context() -> AppContext {
    crate::assert_ok!(AppContext::new(fast_config(FAST_DELAY)), "context starts")
}

pub fn fast_state() -> AppState {
    AppState::new(fast_context())
}

/// Context whose service is slow enough that a test can act mid-request
pub fn slow_state() -> AppState {
    let context = crate::assert_ok!(AppContext::new(fast_config(Duration::from_millis(300))), "context starts");
    AppState::new(context)
}

pub fn state_with_service(service: Arc<dyn AuthService>) -> AppState {
    let context = crate::assert_ok!(AppContext::with_service(fast_config(FAST_DELAY), service), "context starts");
    AppState::new(context)
}

/// Tick frames until `done` holds. Returns false on timeout.
pub fn run_until(state: &mut AppState, mut done: impl FnMut(&AppState) -> bool) -> bool {
    let deadline = Instant::now() + FRAME_TIMEOUT;
    loop {
        state.tick();
        if done(state) {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
}

/// Tick until the mounted screen has no request in flight.
pub fn settle(state: &mut AppState) -> bool {
    run_until(state, |s| !s.is_busy())
}

/// Service that fails every call and counts them
#[derive(Debug, Default)]
pub struct FailingAuthService {
    calls: AtomicUsize,
}

impl FailingAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T: Send + 'static>(&self) -> BoxFuture<'static, Result<T, AuthError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            tokio::time::sleep(FAST_DELAY).await;
            Err(AuthError::service("backend unavailable"))
        }
        .boxed()
    }
}

impl AuthService for FailingAuthService {
    fn sign_in(&self, _email: String, _password: String) -> BoxFuture<'static, Result<User, AuthError>> {
        self.fail()
    }

    fn sign_up(
        &self,
        _name: String,
        _email: String,
        _password: String,
    ) -> BoxFuture<'static, Result<User, AuthError>> {
        self.fail()
    }

    fn request_password_reset(&self, _email: String) -> BoxFuture<'static, Result<(), AuthError>> {
        self.fail()
    }
}

/// Fill the mounted sign in form and submit it.
pub fn submit_sign_in(state: &mut AppState, email: &str, password: &str) -> bool {
    let AppState { context, navigator } = state;
    let view = navigator
        .screen_mut()
        .as_sign_in_mut()
        .expect("sign in screen is mounted");
    view.email.set(email);
    view.password.set(password);
    view.submit(context)
}

/// Fill the mounted sign up form and submit it.
pub fn submit_sign_up(state: &mut AppState, name: &str, email: &str, password: &str, confirm: &str) -> bool {
    let AppState { context, navigator } = state;
    let view = navigator
        .screen_mut()
        .as_sign_up_mut()
        .expect("sign up screen is mounted");
    view.name.set(name);
    view.email.set(email);
    view.password.set(password);
    view.confirm_password.set(confirm);
    view.submit(context)
}

/// Fill the mounted forgot password form and submit it.
pub fn submit_reset(state: &mut AppState, email: &str) -> bool {
    let AppState { context, navigator } = state;
    let view = navigator
        .screen_mut()
        .as_forgot_password_mut()
        .expect("forgot password screen is mounted");
    view.email.set(email);
    view.submit(context)
}

/// Sign in with the demo account and wait for the home screen.
pub fn signed_in_state() -> AppState {
    let mut state = fast_state();
    assert!(submit_sign_in(
        &mut state,
        authdeck::egui_app::service::DEMO_EMAIL,
        authdeck::egui_app::service::DEMO_PASSWORD
    ));
    assert!(run_until(&mut state, |s| s.context.store.state().is_authenticated()));
    state
}
