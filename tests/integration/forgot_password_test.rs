//! Forgot password flow tests

use std::sync::Arc;

use pretty_assertions::assert_eq;

use authdeck::egui_app::{AppState, AuthPhase, Route};

use crate::common::*;

fn reset_state(state: AppState) -> AppState {
    let mut state = state;
    assert!(state.navigator.navigate_to(Route::ForgotPassword));
    state
}

#[test]
fn test_invalid_email_is_not_sent() {
    let mut state = reset_state(fast_state());

    assert!(!submit_reset(&mut state, "nobody"));

    let view = state.navigator.screen_mut().as_forgot_password_mut().unwrap();
    assert_eq!(view.email.error_key(), Some("validation.validEmail"));
    assert!(!view.is_busy());
    assert!(!view.email_sent());
}

#[test]
fn test_reset_request_leaves_store_alone() {
    let mut state = reset_state(fast_state());

    assert!(submit_reset(&mut state, "jane@example.com"));
    assert!(state.is_busy());
    assert!(!state.context.store.state().is_loading());

    assert!(settle(&mut state));

    let view = state.navigator.screen_mut().as_forgot_password_mut().unwrap();
    assert!(view.email_sent());
    assert_eq!(state.context.store.revision(), 0);
    assert_eq!(state.context.store.phase(), AuthPhase::Anonymous);
    assert_eq!(state.navigator.current(), Route::ForgotPassword);
    crate::assert_alert!(
        state.context,
        "Success",
        "We have sent password reset instructions to your email address."
    );
}

#[test]
fn test_reset_failure_keeps_form() {
    let mut state = reset_state(state_with_service(Arc::new(FailingAuthService::new())));

    assert!(submit_reset(&mut state, "jane@example.com"));
    assert!(settle(&mut state));

    let view = state.navigator.screen_mut().as_forgot_password_mut().unwrap();
    assert!(!view.email_sent());
    assert_eq!(view.email.value, "jane@example.com");
    assert_eq!(state.context.store.revision(), 0);
    crate::assert_alert!(state.context, "Error", "Something went wrong. Please try again.");
}
