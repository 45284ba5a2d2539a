//! Screen-local form field state

use crate::egui_app::i18n::Localizer;
use crate::shared::validation::{Field, FormErrors};

/// Value and validation error of one input, owned by its screen.
///
/// The error is kept as a translation key so it follows locale changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    error: Option<&'static str>,
}

impl FormField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Translation key of the current error
    pub fn error_key(&self) -> Option<&'static str> {
        self.error
    }

    /// Current error in the active locale
    pub fn error_message(&self, i18n: &Localizer) -> Option<String> {
        self.error.map(|key| i18n.t(key))
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Take this field's entry from a validation pass, clearing any old error.
    pub fn apply(&mut self, errors: &FormErrors, field: Field) {
        self.error = errors.get(field);
    }
}
