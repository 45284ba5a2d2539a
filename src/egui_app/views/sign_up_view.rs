use eframe::egui;

use crate::egui_app::components::{AppButton, ButtonSize, TextField};
use crate::egui_app::forms::FormField;
use crate::egui_app::state::AppContext;
use crate::egui_app::tasks::{PendingRequest, RequestPoll};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{Route, User};
use crate::egui_app::views::{form_column, header, language_row, rejected_fields, social_buttons, store_error, switch_button};
use crate::shared::error::AuthError;
use crate::shared::validation::{validate_sign_up, Field};

type SignUpResult = Result<User, AuthError>;

/// Registration form
#[derive(Debug, Default)]
pub struct SignUpView {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pending: Option<PendingRequest<SignUpResult>>,
}

impl SignUpView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate every field and, when all pass, start registration.
    pub fn submit(&mut self, ctx: &mut AppContext) -> bool {
        if self.is_busy() {
            return false;
        }

        let errors = validate_sign_up(
            &self.name.value,
            &self.email.value,
            &self.password.value,
            &self.confirm_password.value,
        );
        self.name.apply(&errors, Field::Name);
        self.email.apply(&errors, Field::Email);
        self.password.apply(&errors, Field::Password);
        self.confirm_password.apply(&errors, Field::ConfirmPassword);
        if !errors.is_valid() {
            tracing::info!("[AUTH] sign up rejected by validation: {}", rejected_fields(&errors));
            return false;
        }

        if let Err(e) = ctx.store.login_start() {
            tracing::warn!("[AUTH] sign up not started: {}", e);
            return false;
        }

        tracing::info!("[AUTH] registering {}", self.email.value);
        let request = ctx.service.sign_up(
            self.name.value.clone(),
            self.email.value.clone(),
            self.password.value.clone(),
        );
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

    fn finish(&mut self, ctx: &mut AppContext, result: SignUpResult) {
        match result {
            Ok(user) => {
                tracing::info!("[AUTH] ✓ account created for {} ({})", user.email, user.id);
                if let Err(e) = ctx.store.login_success(user) {
                    tracing::warn!("[AUTH] sign up result dropped: {}", e);
                    return;
                }
                ctx.alert("messages.success", "messages.accountCreated");
            }
            Err(error) => {
                tracing::error!("[AUTH] ✗ sign up failed: {}", error);
                let message = ctx.i18n.t("messages.registerError");
                if let Err(e) = ctx.store.login_failure(message.clone()) {
                    tracing::warn!("[AUTH] sign up failure dropped: {}", e);
                    return;
                }
                ctx.alert_message("messages.error", message);
            }
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &mut AppContext) -> Option<Route> {
        let mut target = None;
        let busy = self.is_busy();

        form_column(ui, |ui| {
            language_row(ui, &mut ctx.i18n);
            let i18n = &ctx.i18n;
            header(ui, &i18n.t("auth.signUpTitle"), &i18n.t("auth.signUpSubtitle"));

            let name_error = self.name.error_message(i18n);
            TextField::new("sign_up_name", &mut self.name.value)
                .label(i18n.t("auth.fullName"))
                .placeholder(i18n.t("auth.fullNamePlaceholder"))
                .required(true)
                .error(name_error.as_deref())
                .enabled(!busy)
                .show(ui);

            let email_error = self.email.error_message(i18n);
            TextField::new("sign_up_email", &mut self.email.value)
                .label(i18n.t("auth.email"))
                .placeholder(i18n.t("auth.emailPlaceholder"))
                .required(true)
                .error(email_error.as_deref())
                .enabled(!busy)
                .show(ui);

            let password_error = self.password.error_message(i18n);
            TextField::new("sign_up_password", &mut self.password.value)
                .label(i18n.t("auth.password"))
                .placeholder(i18n.t("auth.strongPasswordPlaceholder"))
                .required(true)
                .secure(true)
                .toggle_labels(i18n.t("auth.showPassword"), i18n.t("auth.hidePassword"))
                .error(password_error.as_deref())
                .enabled(!busy)
                .show(ui);

            let confirm_error = self.confirm_password.error_message(i18n);
            TextField::new("sign_up_confirm_password", &mut self.confirm_password.value)
                .label(i18n.t("auth.confirmPassword"))
                .placeholder(i18n.t("auth.confirmPasswordPlaceholder"))
                .required(true)
                .secure(true)
                .toggle_labels(i18n.t("auth.showPassword"), i18n.t("auth.hidePassword"))
                .error(confirm_error.as_deref())
                .enabled(!busy)
                .show(ui);

            ui.label(
                egui::RichText::new(i18n.t("auth.passwordHint"))
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(16.0);

            store_error(ui, ctx);

            let loading = busy || ctx.store.state().is_loading();
            let submit = AppButton::new(ctx.i18n.t("auth.createAccount"))
                .size(ButtonSize::Large)
                .loading(loading)
                .show(ui);
            if submit.clicked() {
                self.submit(ctx);
            }
            ui.add_space(24.0);

            styles::divider_with_text(ui, &ctx.i18n.t("auth.or"));
            ui.add_space(8.0);
            social_buttons(ui, !busy, "sign up");
            ui.add_space(16.0);

            if switch_button(ui, ctx.i18n.t("auth.signIn"), busy) {
                target = Some(Route::SignIn);
            }
            ui.add_space(24.0);

            let privacy = ctx.i18n.t("auth.privacyPolicy");
            let terms = ctx.i18n.t_with("auth.termsText", &[("privacy", &privacy)]);
            ui.label(egui::RichText::new(terms).size(12.0).color(colors::TEXT_SECONDARY));
        });

        target
    }
}
