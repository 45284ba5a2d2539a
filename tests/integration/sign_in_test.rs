//! Sign in flow tests

use std::sync::Arc;

use pretty_assertions::assert_eq;

use authdeck::egui_app::service::{DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD, DEMO_USER_ID};
use authdeck::egui_app::{AuthPhase, Route, User};
use authdeck::shared::error::AuthError;

use crate::common::*;

#[test]
fn test_empty_fields_show_both_errors_without_dispatch() {
    let mut state = fast_state();

    assert!(!submit_sign_in(&mut state, "", ""));

    let view = state.navigator.screen_mut().as_sign_in_mut().unwrap();
    assert_eq!(view.email.error_key(), Some("validation.emailRequired"));
    assert_eq!(view.password.error_key(), Some("validation.passwordRequired"));
    assert!(!view.is_busy());
    assert_eq!(state.context.store.revision(), 0);
    assert_eq!(state.context.store.phase(), AuthPhase::Anonymous);
}

#[test]
fn test_malformed_input_uses_second_rule() {
    let mut state = fast_state();

    assert!(!submit_sign_in(&mut state, "not-an-email", "12345"));

    let view = state.navigator.screen_mut().as_sign_in_mut().unwrap();
    assert_eq!(view.email.error_key(), Some("validation.validEmail"));
    assert_eq!(view.password.error_key(), Some("validation.passwordMin"));
    assert_eq!(state.context.store.revision(), 0);
}

#[test]
fn test_demo_credentials_sign_in() {
    let mut state = fast_state();

    assert!(submit_sign_in(&mut state, DEMO_EMAIL, DEMO_PASSWORD));
    assert_eq!(state.context.store.phase(), AuthPhase::Authenticating);
    assert!(state.context.store.state().is_loading());
    assert!(state.is_busy());

    assert!(run_until(&mut state, |s| s.context.store.state().is_authenticated()));

    let auth = state.context.store.state();
    let user = auth.user().unwrap();
    assert_eq!(user.id, DEMO_USER_ID);
    assert_eq!(user.email, DEMO_EMAIL);
    assert_eq!(user.name, DEMO_NAME);
    assert!(!auth.is_loading());
    assert_eq!(auth.error(), None);

    assert_eq!(state.navigator.current(), Route::Home);
    crate::assert_alert!(state.context, "Success", "You have signed in successfully");
}

#[test]
fn test_wrong_password_sets_store_error() {
    let mut state = fast_state();

    assert!(submit_sign_in(&mut state, "a@b.com", "wrongpw"));
    assert!(settle(&mut state));

    let auth = state.context.store.state();
    assert!(!auth.is_authenticated());
    assert!(!auth.is_loading());
    assert_eq!(auth.error(), Some("Invalid email or password"));
    assert_eq!(state.context.store.phase(), AuthPhase::AuthError);
    assert_eq!(state.navigator.current(), Route::SignIn);
    crate::assert_alert!(state.context, "Error", "Invalid email or password");
}

#[test]
fn test_retry_after_failure_clears_error() {
    let mut state = fast_state();
    assert!(submit_sign_in(&mut state, "a@b.com", "wrongpw"));
    assert!(settle(&mut state));

    assert!(submit_sign_in(&mut state, DEMO_EMAIL, DEMO_PASSWORD));
    assert_eq!(state.context.store.state().error(), None);
    assert!(run_until(&mut state, |s| s.navigator.current() == Route::Home));
}

#[test]
fn test_service_failure_uses_generic_message() {
    let service = Arc::new(FailingAuthService::new());
    let mut state = state_with_service(service.clone());

    assert!(submit_sign_in(&mut state, DEMO_EMAIL, DEMO_PASSWORD));
    assert!(settle(&mut state));

    assert_eq!(service.calls(), 1);
    assert_eq!(
        state.context.store.state().error(),
        Some("Something went wrong. Please try again.")
    );
    crate::assert_alert!(state.context, "Error", "Something went wrong. Please try again.");
}

#[test]
fn test_second_submit_while_busy_is_ignored() {
    let service = Arc::new(FailingAuthService::new());
    let mut state = state_with_service(service.clone());

    assert!(submit_sign_in(&mut state, DEMO_EMAIL, DEMO_PASSWORD));
    assert!(!submit_sign_in(&mut state, DEMO_EMAIL, DEMO_PASSWORD));
    assert!(settle(&mut state));

    assert_eq!(service.calls(), 1);
    assert_eq!(state.context.alerts.len(), 1);
}

#[test]
fn test_logout_returns_to_sign_in() {
    let mut state = signed_in_state();
    assert_eq!(state.navigator.current(), Route::Home);

    {
        let authdeck::egui_app::AppState { context, navigator } = &mut state;
        navigator.screen_mut().as_home_mut().unwrap().logout(context);
    }
    state.tick();

    assert_eq!(state.navigator.current(), Route::SignIn);
    let auth = state.context.store.state();
    assert!(!auth.is_authenticated());
    assert!(auth.user().is_none());
    assert!(!auth.is_loading());
    assert_eq!(auth.error(), None);
}

#[test]
fn test_login_start_rejected_while_signed_in() {
    let mut state = signed_in_state();
    let revision = state.context.store.revision();

    crate::assert_err!(state.context.store.login_start(), AuthError::InvalidTransition { .. });
    assert!(state.context.store.state().is_authenticated());
    assert_eq!(state.context.store.revision(), revision);
}

#[test]
fn test_completion_without_start_is_rejected() {
    let mut state = fast_state();

    let user = User::new(DEMO_USER_ID, DEMO_EMAIL, DEMO_NAME);
    crate::assert_err!(state.context.store.login_success(user), AuthError::InvalidTransition { .. });
    crate::assert_err!(state.context.store.login_failure("late"), AuthError::InvalidTransition { .. });
    assert_eq!(state.context.store.phase(), AuthPhase::Anonymous);

    crate::assert_ok!(state.context.store.login_start());
    assert_eq!(state.context.store.phase(), AuthPhase::Authenticating);
}
