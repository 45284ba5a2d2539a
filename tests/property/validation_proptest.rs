//! Property-based tests for form validation

use proptest::prelude::*;

use authdeck::shared::validation::{
    is_strong_password, is_valid_email, validate_sign_in, validate_sign_up, Field,
    STRONG_PASSWORD_MIN_LEN,
};

/// Password built from one of each required class plus filler
fn strong_password() -> impl Strategy<Value = String> {
    (
        "[a-z]",
        "[A-Z]",
        "[0-9]",
        proptest::string::string_regex("[A-Za-z0-9@$!%*?&]{5,24}").unwrap(),
    )
        .prop_map(|(lower, upper, digit, rest)| format!("{upper}{rest}{lower}{digit}"))
}

proptest! {
    #[test]
    fn test_email_without_at_is_invalid(s in "[^@]*") {
        prop_assert!(!is_valid_email(&s));
    }

    #[test]
    fn test_simple_addresses_are_valid(
        local in "[a-z0-9._]{1,16}",
        domain in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_short_password_is_never_strong(s in ".{0,7}") {
        prop_assume!(s.chars().count() < STRONG_PASSWORD_MIN_LEN);
        prop_assert!(!is_strong_password(&s));
    }

    #[test]
    fn test_constructed_password_is_strong(password in strong_password()) {
        prop_assert!(is_strong_password(&password));
    }

    #[test]
    fn test_password_without_digit_is_weak(s in "[A-Za-z]{8,24}") {
        prop_assert!(!is_strong_password(&s));
    }

    #[test]
    fn test_sign_in_errors_at_most_one_per_field(email in ".{0,20}", password in ".{0,12}") {
        let errors = validate_sign_in(&email, &password);
        prop_assert!(errors.len() <= 2);
        for (field, _) in errors.iter() {
            prop_assert!(matches!(field, Field::Email | Field::Password));
        }
    }

    #[test]
    fn test_matching_strong_sign_up_is_valid(
        name in "[A-Za-z]{2,12}",
        password in strong_password(),
    ) {
        let errors = validate_sign_up(&name, "jane@example.com", &password, &password);
        prop_assert!(errors.is_valid());
    }
}
