use eframe::egui;

use crate::egui_app::components::{AppButton, ButtonSize, TextField};
use crate::egui_app::forms::FormField;
use crate::egui_app::state::AppContext;
use crate::egui_app::tasks::{PendingRequest, RequestPoll};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;
use crate::egui_app::views::{form_column, header, language_row, rejected_fields};
use crate::shared::error::AuthError;
use crate::shared::validation::{validate_forgot_password, Field};

type ResetResult = Result<(), AuthError>;

/// Password reset request form.
///
/// Does not authenticate, so it keeps its own loading flag and never touches
/// the auth store.
#[derive(Debug, Default)]
pub struct ForgotPasswordView {
    pub email: FormField,
    email_sent: bool,
    pending: Option<PendingRequest<ResetResult>>,
}

impl ForgotPasswordView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local loading flag
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The reset email was sent and the confirmation view is showing
    pub fn email_sent(&self) -> bool {
        self.email_sent
    }

    pub fn submit(&mut self, ctx: &mut AppContext) -> bool {
        if self.is_busy() {
            return false;
        }

        let errors = validate_forgot_password(&self.email.value);
        self.email.apply(&errors, Field::Email);
        if !errors.is_valid() {
            tracing::info!("[AUTH] password reset rejected by validation: {}", rejected_fields(&errors));
            return false;
        }

        tracing::info!("[AUTH] requesting password reset for {}", self.email.value);
        let request = ctx.service.request_password_reset(self.email.value.clone());
        self.pending = Some(ctx.tasks.spawn(request));
        true
    }

    pub fn poll(&mut self, ctx: &mut AppContext) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        match pending.try_poll() {
            RequestPoll::Pending => false,
            RequestPoll::Cancelled => {
                self.pending = None;
                false
            }
            RequestPoll::Ready(result) => {
                self.pending = None;
                self.finish(ctx, result);
                true
            }
        }
    }

    fn finish(&mut self, ctx: &mut AppContext, result: ResetResult) {
        match result {
            Ok(()) => {
                tracing::info!("[AUTH] ✓ password reset email sent");
                self.email_sent = true;
                ctx.alert("messages.success", "auth.resetEmailSentDesc");
            }
            Err(error) => {
                tracing::error!("[AUTH] ✗ password reset failed: {}", error);
                ctx.alert("messages.error", "messages.loginError");
            }
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &mut AppContext) -> Option<Route> {
        if self.email_sent {
            return self.render_sent(ui, ctx);
        }

        let mut target = None;
        let busy = self.is_busy();

        form_column(ui, |ui| {
            language_row(ui, &mut ctx.i18n);
            let i18n = &ctx.i18n;
            header(ui, &i18n.t("auth.forgotPasswordTitle"), &i18n.t("auth.forgotPasswordSubtitle"));

            let email_error = self.email.error_message(i18n);
            TextField::new("forgot_password_email", &mut self.email.value)
                .label(i18n.t("auth.email"))
                .placeholder(i18n.t("auth.emailPlaceholder"))
                .required(true)
                .error(email_error.as_deref())
                .enabled(!busy)
                .show(ui);

            let submit = AppButton::new(i18n.t("auth.resetPassword"))
                .size(ButtonSize::Large)
                .loading(busy)
                .show(ui);
            if submit.clicked() {
                self.submit(ctx);
            }
            ui.add_space(24.0);

            let back = egui::RichText::new(ctx.i18n.t("auth.backToSignIn"))
                .size(16.0)
                .color(colors::PRIMARY);
            if ui.add_enabled(!busy, egui::Link::new(back)).clicked() {
                target = Some(Route::SignIn);
            }
        });

        target
    }

    fn render_sent(&mut self, ui: &mut egui::Ui, ctx: &mut AppContext) -> Option<Route> {
        let mut target = None;

        form_column(ui, |ui| {
            language_row(ui, &mut ctx.i18n);
            ui.add_space(40.0);

            styles::card_frame().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("✉").size(48.0).color(colors::PRIMARY));
                    ui.add_space(16.0);
                    ui.label(styles::title(ctx.i18n.t("auth.resetEmailSent")).size(24.0));
                    ui.add_space(8.0);
                    ui.label(styles::subtitle(ctx.i18n.t("auth.resetEmailSentDesc")));
                    ui.add_space(32.0);

                    let back = AppButton::new(ctx.i18n.t("auth.backToSignIn"))
                        .size(ButtonSize::Large)
                        .show(ui);
                    if back.clicked() {
                        target = Some(Route::SignIn);
                    }
                });
            });
        });

        target
    }
}
