//! Text input primitive
//!
//! Label with an optional required marker, a bordered single-line editor and
//! an inline error line. Secure fields get a show/hide toggle whose state lives
//! in egui's temporary memory under the widget id and never leaves the widget.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};

/// Whether the editor should mask its text
pub fn is_masked(secure: bool, revealed: bool) -> bool {
    secure && !revealed
}

pub struct TextField<'a> {
    id_salt: &'a str,
    value: &'a mut String,
    label: Option<String>,
    placeholder: String,
    required: bool,
    error: Option<&'a str>,
    secure: bool,
    enabled: bool,
    toggle_labels: (String, String),
}

impl<'a> TextField<'a> {
    pub fn new(id_salt: &'a str, value: &'a mut String) -> Self {
        Self {
            id_salt,
            value,
            label: None,
            placeholder: String::new(),
            required: false,
            error: None,
            secure: false,
            enabled: true,
            toggle_labels: ("Show".to_string(), "Hide".to_string()),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Mask the entry and offer a visibility toggle
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Captions of the visibility toggle, (reveal, conceal)
    pub fn toggle_labels(mut self, show: impl Into<String>, hide: impl Into<String>) -> Self {
        self.toggle_labels = (show.into(), hide.into());
        self
    }

    /// Returns the editor's response.
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            id_salt,
            value,
            label,
            placeholder,
            required,
            error,
            secure,
            enabled,
            toggle_labels: (show_caption, hide_caption),
        } = self;

        let reveal_id = ui.make_persistent_id(("text_field_reveal", id_salt));
        let mut revealed = ui.data(|d| d.get_temp::<bool>(reveal_id)).unwrap_or(false);

        let response = ui
            .vertical(|ui| {
                if let Some(label) = &label {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 2.0;
                        ui.label(egui::RichText::new(label).size(16.0).strong().color(colors::TEXT_PRIMARY));
                        if required {
                            ui.label(egui::RichText::new(" *").size(16.0).strong().color(colors::ERROR));
                        }
                    });
                }

                let inner = styles::input_frame(error.is_some()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let toggle_width = if secure { 56.0 } else { 0.0 };
                        let editor = egui::TextEdit::singleline(value)
                            .hint_text(egui::RichText::new(&placeholder).color(colors::PLACEHOLDER))
                            .password(is_masked(secure, revealed))
                            .frame(false)
                            .font(egui::TextStyle::Body)
                            .text_color(colors::TEXT_PRIMARY)
                            .desired_width(ui.available_width() - toggle_width);
                        let response = ui.add_enabled(enabled, editor);

                        if secure {
                            let caption = if revealed { &hide_caption } else { &show_caption };
                            if ui
                                .small_button(egui::RichText::new(caption).color(colors::PRIMARY))
                                .clicked()
                            {
                                revealed = !revealed;
                            }
                        }
                        response
                    })
                    .inner
                });

                if let Some(error) = error {
                    ui.label(egui::RichText::new(error).size(14.0).color(colors::ERROR));
                }
                ui.add_space(8.0);

                inner.inner
            })
            .inner;

        ui.data_mut(|d| d.insert_temp(reveal_id, revealed));
        response
    }
}
