use eframe::egui;

use crate::egui_app::components::{AppButton, TextField};
use crate::egui_app::forms::FormField;
use crate::egui_app::state::AppContext;
use crate::egui_app::tasks::{PendingRequest, RequestPoll};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{Route, User};
use crate::egui_app::views::{form_column, header, language_row, rejected_fields, social_buttons, store_error, switch_button};
use crate::shared::error::AuthError;
use crate::shared::validation::{validate_sign_in, Field};

type SignInResult = Result<User, AuthError>;

/// Sign in form
#[derive(Debug, Default)]
pub struct SignInView {
    pub email: FormField,
    pub password: FormField,
    pending: Option<PendingRequest<SignInResult>>,
}

impl SignInView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sign in request is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate and, when valid, start the sign in request.
    ///
    /// Returns true when a request was started.
    pub fn submit(&mut self, ctx: &mut AppContext) -> bool {
        if self.is_busy() {
            return false;
        }

        let errors = validate_sign_in(&self.email.value, &self.password.value);
        self.email.apply(&errors, Field::Email);
        self.password.apply(&errors, Field::Password);
        if !errors.is_valid() {
            tracing::info!("[AUTH] sign in rejected by validation: {}", rejected_fields(&errors));
            return false;
        }

        if let Err(e) = ctx.store.login_start() {
            tracing::warn!("[AUTH] sign in not started: {}", e);
            return false;
        }

        tracing::info!("[AUTH] signing in {}", self.email.value);
        let request = ctx
            .service
            .sign_in(self.email.value.clone(), self.password.value.clone());
        self.pending = Some(ctx.tasks.spawn(request));
        true
    }

    /// Apply the outcome of a finished request. Returns true when one was applied.
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

    fn finish(&mut self, ctx: &mut AppContext, result: SignInResult) {
        match result {
            Ok(user) => {
                tracing::info!("[AUTH] ✓ signed in as {}", user.email);
                if let Err(e) = ctx.store.login_success(user) {
                    tracing::warn!("[AUTH] sign in result dropped: {}", e);
                    return;
                }
                ctx.alert("messages.success", "messages.loginSuccess");
            }
            Err(error) => {
                let key = match error {
                    AuthError::InvalidCredentials => "messages.invalidCredentials",
                    other => {
                        tracing::error!("[AUTH] ✗ sign in failed: {}", other);
                        "messages.loginError"
                    }
                };
                let message = ctx.i18n.t(key);
                if let Err(e) = ctx.store.login_failure(message.clone()) {
                    tracing::warn!("[AUTH] sign in failure dropped: {}", e);
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
            header(ui, &i18n.t("auth.welcome"), &i18n.t("auth.signInSubtitle"));

            let email_error = self.email.error_message(i18n);
            TextField::new("sign_in_email", &mut self.email.value)
                .label(i18n.t("auth.email"))
                .placeholder(i18n.t("auth.emailPlaceholder"))
                .required(true)
                .error(email_error.as_deref())
                .enabled(!busy)
                .show(ui);

            let password_error = self.password.error_message(i18n);
            TextField::new("sign_in_password", &mut self.password.value)
                .label(i18n.t("auth.password"))
                .placeholder(i18n.t("auth.passwordPlaceholder"))
                .required(true)
                .secure(true)
                .toggle_labels(i18n.t("auth.showPassword"), i18n.t("auth.hidePassword"))
                .error(password_error.as_deref())
                .enabled(!busy)
                .show(ui);

            store_error(ui, ctx);

            let loading = busy || ctx.store.state().is_loading();
            if AppButton::new(ctx.i18n.t("auth.signIn")).loading(loading).show(ui).clicked() {
                self.submit(ctx);
            }
            ui.add_space(16.0);

            let forgot = egui::RichText::new(ctx.i18n.t("auth.forgotPassword"))
                .size(16.0)
                .underline()
                .color(colors::PRIMARY);
            if ui.add_enabled(!busy, egui::Link::new(forgot)).clicked() {
                target = Some(Route::ForgotPassword);
            }
            ui.add_space(24.0);

            styles::divider_with_text(ui, &ctx.i18n.t("auth.or"));
            ui.add_space(8.0);
            social_buttons(ui, !busy, "sign in");
            ui.add_space(16.0);

            if switch_button(ui, ctx.i18n.t("auth.createAccount"), busy) {
                target = Some(Route::SignUp);
            }
        });

        target
    }
}
