//! Language toggle primitive

use eframe::egui;

use crate::egui_app::i18n::Localizer;
use crate::egui_app::theme::{colors, styles};
use crate::shared::locale::Locale;

/// Badge text for the active locale
pub fn badge_text(locale: Locale) -> String {
    format!("{} 🌐", locale.code().to_ascii_uppercase())
}

/// Pill showing the active locale; a click flips it.
pub fn show(ui: &mut egui::Ui, i18n: &mut Localizer) -> egui::Response {
    let hover = i18n.t("language.toggle");
    let response = styles::pill_frame()
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(badge_text(i18n.locale()))
                    .size(14.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            )
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_text(hover);

    if response.clicked() {
        i18n.toggle();
    }
    response
}
