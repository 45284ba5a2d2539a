use eframe::egui;

use crate::egui_app::components::{alert, language_toggle, AppButton, ButtonSize, ButtonVariant};
use crate::egui_app::i18n::Localizer;
use crate::egui_app::state::{AppContext, AppState};
use crate::egui_app::theme::{colors, styles};
use crate::shared::validation::FormErrors;

pub mod forgot_password_view;
pub mod home_view;
pub mod sign_in_view;
pub mod sign_up_view;

pub use forgot_password_view::ForgotPasswordView;
pub use home_view::HomeView;
pub use sign_in_view::SignInView;
pub use sign_up_view::SignUpView;

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::screen_frame())
        .show(ctx, |ui| {
            let AppState { context, navigator } = &mut *state;
            if let Some(route) = navigator.screen_mut().render(ui, context) {
                navigator.navigate_to(route);
            }
            // A store action dispatched while drawing (logout) shows next frame.
            if navigator.sync(&context.store) {
                ui.ctx().request_repaint();
            }
        });

    let ok = state.context.i18n.t("messages.ok");
    alert::show(ctx, &mut state.context.alerts, &ok);
}

/// Scrollable, horizontally centred column of form width
pub(crate) fn form_column<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(styles::FORM_WIDTH);
                add_contents(ui)
            })
            .inner
        })
        .inner
}

/// Language toggle pinned to the right
pub(crate) fn language_row(ui: &mut egui::Ui, i18n: &mut Localizer) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        language_toggle::show(ui, i18n);
    });
    ui.add_space(20.0);
}

pub(crate) fn header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(styles::title(title));
        ui.add_space(8.0);
        ui.label(styles::subtitle(subtitle));
    });
    ui.add_space(40.0);
}

/// Comma separated names of the fields that failed, for logging
pub(crate) fn rejected_fields(errors: &FormErrors) -> String {
    errors
        .iter()
        .map(|(field, _)| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Inline message for the last failed sign in or sign up, read from the store
pub(crate) fn store_error(ui: &mut egui::Ui, ctx: &AppContext) {
    if let Some(error) = ctx.store.state().error() {
        ui.label(egui::RichText::new(error).size(14.0).color(colors::ERROR));
        ui.add_space(8.0);
    }
}

/// Third-party provider buttons. Providers are not wired up; a click is only logged.
pub(crate) fn social_buttons(ui: &mut egui::Ui, enabled: bool, action: &str) {
    ui.columns(2, |columns| {
        for (column, (provider, mark, color)) in columns
            .iter_mut()
            .zip([("Google", "G", colors::GOOGLE), ("Facebook", "f", colors::FACEBOOK)])
        {
            let text = egui::RichText::new(format!("{mark}  {provider}"))
                .size(14.0)
                .color(color);
            let width = column.available_width();
            let button = egui::Button::new(text)
                .fill(colors::SURFACE)
                .stroke(egui::Stroke::new(1.0, colors::BORDER))
                .corner_radius(egui::CornerRadius::same(12))
                .min_size(egui::vec2(width, 44.0));
            let clicked = column.add_enabled(enabled, button).clicked();
            if clicked {
                tracing::info!("[AUTH] {} {} requested", provider, action);
            }
        }
    });
}

/// Outline button used to switch between sign in and sign up
pub(crate) fn switch_button(ui: &mut egui::Ui, title: String, disabled: bool) -> bool {
    AppButton::new(title)
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Medium)
        .disabled(disabled)
        .show(ui)
        .clicked()
}
