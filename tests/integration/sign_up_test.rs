//! Sign up flow tests

use std::sync::Arc;

use pretty_assertions::assert_eq;

use authdeck::egui_app::service::DEMO_USER_ID;
use authdeck::egui_app::{AppState, AuthPhase, Route};

use crate::common::*;

fn sign_up_state(state: AppState) -> AppState {
    let mut state = state;
    assert!(state.navigator.navigate_to(Route::SignUp));
    state
}

#[test]
fn test_empty_form_rejects_every_field() {
    let mut state = sign_up_state(fast_state());

    assert!(!submit_sign_up(&mut state, "", "", "", ""));

    let view = state.navigator.screen_mut().as_sign_up_mut().unwrap();
    assert_eq!(view.name.error_key(), Some("validation.nameRequired"));
    assert_eq!(view.email.error_key(), Some("validation.emailRequired"));
    assert_eq!(view.password.error_key(), Some("validation.passwordRequired"));
    assert_eq!(
        view.confirm_password.error_key(),
        Some("validation.confirmPasswordRequired")
    );
    assert_eq!(state.context.store.revision(), 0);
}

#[test]
fn test_weak_and_mismatched_passwords() {
    let mut state = sign_up_state(fast_state());

    assert!(!submit_sign_up(&mut state, "J", "jane@example.com", "password", "password1"));

    let view = state.navigator.screen_mut().as_sign_up_mut().unwrap();
    assert_eq!(view.name.error_key(), Some("validation.nameMin"));
    assert!(!view.email.has_error());
    assert_eq!(view.password.error_key(), Some("validation.passwordStrong"));
    assert_eq!(view.confirm_password.error_key(), Some("validation.passwordsMatch"));
    assert!(!view.is_busy());
}

#[test]
fn test_valid_form_creates_account_and_signs_in() {
    let mut state = sign_up_state(fast_state());

    assert!(submit_sign_up(&mut state, " Jane Doe ", "jane@example.com", "Secret123", "Secret123"));
    assert_eq!(state.context.store.phase(), AuthPhase::Authenticating);

    assert!(run_until(&mut state, |s| s.navigator.current() == Route::Home));

    let user = state.context.store.state().user().unwrap().clone();
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@example.com");
    assert_ne!(user.id, DEMO_USER_ID);
    crate::assert_ok!(uuid::Uuid::parse_str(&user.id), "sign up assigns a uuid");
    crate::assert_alert!(state.context, "Success", "Your account has been created");
}

#[test]
fn test_service_failure_sets_register_error() {
    let service = Arc::new(FailingAuthService::new());
    let mut state = sign_up_state(state_with_service(service));

    assert!(submit_sign_up(&mut state, "Jane Doe", "jane@example.com", "Secret123", "Secret123"));
    assert!(settle(&mut state));

    assert_eq!(state.navigator.current(), Route::SignUp);
    assert_eq!(state.context.store.phase(), AuthPhase::AuthError);
    assert_eq!(
        state.context.store.state().error(),
        Some("Registration failed. Please try again.")
    );
    crate::assert_alert!(state.context, "Error", "Registration failed. Please try again.");
}
