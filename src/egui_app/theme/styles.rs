//! Theme Styling Functions
//!
//! Helpers that apply the light palette consistently across screens.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;

/// Horizontal padding of every screen
pub const SCREEN_PADDING: i8 = 24;

/// Width of form content
pub const FORM_WIDTH: f32 = 360.0;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    style.visuals.panel_fill = colors::BG_LIGHT;
    style.visuals.window_fill = colors::SURFACE;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.window_corner_radius = CornerRadius::same(16);

    style.visuals.extreme_bg_color = colors::SURFACE;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors::PRIMARY);
    style.visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors::PRIMARY);

    style.visuals.selection.bg_fill = colors::PRIMARY.gamma_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, colors::PRIMARY);
    style.visuals.hyperlink_color = colors::PRIMARY;

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);

    ctx.set_style(style);
}

/// Frame filling the whole screen
pub fn screen_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::symmetric(SCREEN_PADDING, SCREEN_PADDING))
}

/// Rounded white card with a soft shadow
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(egui::Margin::same(24))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(25),
        })
}

/// Bordered text input container; red border when the field has an error
pub fn input_frame(has_error: bool) -> egui::Frame {
    let border = if has_error { colors::ERROR } else { colors::BORDER };
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(16, 14))
}

/// Pill-shaped badge used by the language toggle
pub fn pill_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(20))
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Screen title
pub fn title(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(32.0).strong().color(colors::TEXT_PRIMARY)
}

/// Muted line under a title
pub fn subtitle(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(16.0).color(colors::TEXT_SECONDARY)
}

/// Horizontal rule with a centred caption ("or")
pub fn divider_with_text(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        let line_width = ((ui.available_width() - 40.0) / 2.0).max(0.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(line_width, 1.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, colors::BORDER);
        ui.label(egui::RichText::new(text).size(14.0).color(colors::TEXT_SECONDARY));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(line_width, 1.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, colors::BORDER);
    });
}
