use std::sync::Arc;

use thiserror::Error;

use crate::egui_app::auth::AuthStore;
use crate::egui_app::components::alert::{Alert, AlertQueue};
use crate::egui_app::config::Config;
use crate::egui_app::i18n::Localizer;
use crate::egui_app::navigation::Navigator;
use crate::egui_app::service::{AuthService, SimulatedAuthService};
use crate::egui_app::tasks::TaskRunner;
use crate::shared::config::ConfigError;

/// Failures while bringing the app up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("bundled translations are invalid: {0}")]
    Translations(#[from] serde_json::Error),
    #[error("failed to start request runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Everything a screen handler may touch, passed explicitly by `&mut`.
///
/// The auth store is only reachable through its actions; screens never
/// write its fields.
pub struct AppContext {
    pub config: Config,
    pub store: AuthStore,
    pub i18n: Localizer,
    pub tasks: TaskRunner,
    pub service: Arc<dyn AuthService>,
    pub alerts: AlertQueue,
}

impl AppContext {
    /// Context backed by the simulated auth service.
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let service = Arc::new(SimulatedAuthService::new(config.app()));
        Self::with_service(config, service)
    }

    pub fn with_service(config: Config, service: Arc<dyn AuthService>) -> Result<Self, StartupError> {
        let i18n = Localizer::new(config.initial_locale())?;
        let tasks = TaskRunner::new()?;
        tracing::info!("[APP] context ready, locale {}", i18n.locale());

        Ok(Self {
            config,
            store: AuthStore::new(),
            i18n,
            tasks,
            service,
            alerts: AlertQueue::new(),
        })
    }

    /// Queue an alert whose title and message are translation keys.
    pub fn alert(&mut self, title_key: &str, message_key: &str) {
        let alert = Alert::new(self.i18n.t(title_key), self.i18n.t(message_key));
        self.alerts.push(alert);
    }

    /// Queue an alert with an already translated message.
    pub fn alert_message(&mut self, title_key: &str, message: impl Into<String>) {
        let alert = Alert::new(self.i18n.t(title_key), message);
        self.alerts.push(alert);
    }
}

/// Central application state: the shared context plus the mounted screen.
pub struct AppState {
    pub context: AppContext,
    pub navigator: Navigator,
}

impl AppState {
    pub fn new(context: AppContext) -> Self {
        let navigator = Navigator::new(context.store.state().is_authenticated());
        Self { context, navigator }
    }

    /// Per-frame work that does not draw: deliver finished requests, then let
    /// the navigator follow any store change they caused.
    pub fn tick(&mut self) {
        self.navigator.screen_mut().poll(&mut self.context);
        self.navigator.sync(&self.context.store);
    }

    /// Whether the mounted screen is waiting on a request
    pub fn is_busy(&self) -> bool {
        self.navigator.screen().is_busy()
    }
}
