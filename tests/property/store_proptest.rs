//! Property-based tests for the auth store

use proptest::prelude::*;

use authdeck::egui_app::{AuthPhase, AuthStore, User};

#[derive(Debug, Clone)]
enum Action {
    Start,
    Success(String),
    Failure(String),
    Logout,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Start),
        "[a-z]{1,8}".prop_map(Action::Success),
        "[a-z ]{1,20}".prop_map(Action::Failure),
        Just(Action::Logout),
    ]
}

fn apply(store: &mut AuthStore, action: &Action) {
    let _ = match action {
        Action::Start => store.login_start(),
        Action::Success(name) => store.login_success(User::new("1", format!("{name}@test.com"), name.clone())),
        Action::Failure(message) => store.login_failure(message.clone()),
        Action::Logout => {
            store.logout();
            Ok(())
        }
    };
}

proptest! {
    #[test]
    fn test_authenticated_iff_user_present(actions in prop::collection::vec(action(), 0..40)) {
        let mut store = AuthStore::new();
        for action in &actions {
            apply(&mut store, action);
            let state = store.state();
            prop_assert_eq!(state.is_authenticated(), state.user().is_some());
            if state.is_authenticated() {
                prop_assert!(!state.is_loading());
                prop_assert!(state.error().is_none());
            }
        }
    }

    #[test]
    fn test_login_start_twice_matches_once(actions in prop::collection::vec(action(), 0..20)) {
        let mut once = AuthStore::new();
        for action in &actions {
            apply(&mut once, action);
        }
        let mut twice = AuthStore::new();
        for action in &actions {
            apply(&mut twice, action);
        }

        let _ = once.login_start();
        let _ = twice.login_start();
        let _ = twice.login_start();
        prop_assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_logout_always_resets(actions in prop::collection::vec(action(), 0..20)) {
        let mut store = AuthStore::new();
        for action in &actions {
            apply(&mut store, action);
        }
        store.logout();
        prop_assert_eq!(store.phase(), AuthPhase::Anonymous);
        prop_assert!(store.state().user().is_none());
        prop_assert!(!store.state().is_loading());
        prop_assert!(store.state().error().is_none());
    }
}
