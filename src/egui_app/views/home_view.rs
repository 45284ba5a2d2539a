use eframe::egui;

use crate::egui_app::components::{AppButton, ButtonSize, ButtonVariant};
use crate::egui_app::state::AppContext;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;
use crate::egui_app::views::form_column;

/// Shown when no user name is available
const FALLBACK_NAME: &str = "User";

/// Signed-in landing screen
#[derive(Debug, Default)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }

    /// Greeting line for the signed-in user
    pub fn greeting(ctx: &AppContext) -> String {
        let name = ctx
            .store
            .state()
            .user()
            .map(|user| user.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME);
        ctx.i18n.t_with("home.hello", &[("name", name)])
    }

    pub fn logout(&mut self, ctx: &mut AppContext) {
        tracing::info!("[AUTH] logging out");
        ctx.store.logout();
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &mut AppContext) -> Option<Route> {
        form_column(ui, |ui| {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(styles::title(ctx.i18n.t("home.welcome")).size(28.0));
                ui.add_space(8.0);
                ui.label(styles::subtitle(Self::greeting(ctx)).size(18.0));
            });
            ui.add_space(40.0);

            let (name, email) = ctx
                .store
                .state()
                .user()
                .map(|user| (user.name.clone(), user.email.clone()))
                .unwrap_or_default();

            styles::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                info_row(ui, &ctx.i18n.t("home.name"), &name);
                ui.separator();
                info_row(ui, &ctx.i18n.t("home.email"), &email);
            });
            ui.add_space(40.0);

            let logout = AppButton::new(ctx.i18n.t("home.logout"))
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Large)
                .show(ui);
            if logout.clicked() {
                self.logout(ctx);
            }
        });

        None
    }
}

fn info_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{label}:"))
                .size(16.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).size(16.0).color(colors::TEXT_SECONDARY));
        });
    });
}
