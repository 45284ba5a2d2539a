//! Form Validation Rules
//!
//! Pure, synchronous checks over field values plus the per-screen
//! aggregations that turn them into field errors.
//!
//! Aggregation evaluates every field on its own (no short-circuit across
//! fields) and records the first failing rule per field, so a single submit
//! surfaces every problem at once. Error values carry translation keys, not
//! rendered text; the screens look the keys up in the active locale.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`, no whitespace and no extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Minimum length for a strong (sign-up) password
pub const STRONG_PASSWORD_MIN_LEN: usize = 8;

/// Minimum length accepted by the sign-in form
pub const SIGN_IN_PASSWORD_MIN_LEN: usize = 6;

/// Minimum trimmed length of a display name
pub const NAME_MIN_LEN: usize = 2;

/// A form field that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Password => write!(f, "password"),
            Field::ConfirmPassword => write!(f, "confirmPassword"),
        }
    }
}

/// True iff `s` has the `local@domain.tld` shape.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(s))
}

/// At least 8 characters with a lowercase letter, an uppercase letter and a digit.
pub fn is_strong_password(s: &str) -> bool {
    s.chars().count() >= STRONG_PASSWORD_MIN_LEN
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
}

/// True iff `s` is not empty after trimming whitespace.
pub fn is_non_empty_trimmed(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Errors collected from one validation pass, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` for `field` unless an earlier rule already failed there.
    pub fn reject(&mut self, field: Field, key: &'static str) {
        self.errors.entry(field).or_insert(key);
    }

    /// Translation key of the error recorded for `field`
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, key)| (*field, *key))
    }
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if !is_non_empty_trimmed(email) {
        errors.reject(Field::Email, "validation.emailRequired");
    } else if !is_valid_email(email) {
        errors.reject(Field::Email, "validation.validEmail");
    }
}

/// Sign-in form: email shape and a password of at least six characters.
pub fn validate_sign_in(email: &str, password: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    check_email(&mut errors, email);

    if !is_non_empty_trimmed(password) {
        errors.reject(Field::Password, "validation.passwordRequired");
    } else if password.chars().count() < SIGN_IN_PASSWORD_MIN_LEN {
        errors.reject(Field::Password, "validation.passwordMin");
    }

    errors
}

/// Sign-up form: name, email, strong password and matching confirmation.
pub fn validate_sign_up(name: &str, email: &str, password: &str, confirm_password: &str) -> FormErrors {
    let mut errors = FormErrors::new();

    if !is_non_empty_trimmed(name) {
        errors.reject(Field::Name, "validation.nameRequired");
    } else if name.trim().chars().count() < NAME_MIN_LEN {
        errors.reject(Field::Name, "validation.nameMin");
    }

    check_email(&mut errors, email);

    if !is_non_empty_trimmed(password) {
        errors.reject(Field::Password, "validation.passwordRequired");
    } else if !is_strong_password(password) {
        errors.reject(Field::Password, "validation.passwordStrong");
    }

    if !is_non_empty_trimmed(confirm_password) {
        errors.reject(Field::ConfirmPassword, "validation.confirmPasswordRequired");
    } else if password != confirm_password {
        errors.reject(Field::ConfirmPassword, "validation.passwordsMatch");
    }

    errors
}

/// Forgot-password form: email only.
pub fn validate_forgot_password(email: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    check_email(&mut errors, email);
    errors
}
