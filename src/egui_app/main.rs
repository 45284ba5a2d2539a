/**
 * egui Native App - Main Entry Point
 *
 * Loads configuration, sets up logging and runs the auth screens.
 */
use std::time::Duration;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use authdeck::egui_app::theme::styles;
use authdeck::egui_app::{views, AppContext, AppState, Config};

/// Repaint interval while a request is in flight, so the result is picked up
const BUSY_REPAINT: Duration = Duration::from_millis(50);

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config);

    match config.source() {
        Some(path) => tracing::info!("[APP] config loaded from {}", path.display()),
        None => tracing::info!("[APP] using default config"),
    }

    let context = AppContext::new(config)?;
    let state = AppState::new(context);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 820.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AuthDeck",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AuthApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct AuthApp {
    state: AppState,
}

impl eframe::App for AuthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_main_panel(ctx, &mut self.state);

        if self.state.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
