//! AuthDeck - Main Library
//!
//! Authentication screens for a native egui app: sign in, sign up, password
//! reset and a signed-in home screen, driven by a single auth store.
//!
//! # Module Structure
//!
//! - **`shared`** - UI-independent pieces
//!   - Form validation rules
//!   - Error types
//!   - Configuration and locale
//!
//! - **`egui_app`** - Native app (egui/eframe)
//!   - Auth store and navigation selector
//!   - Screens and UI primitives
//!   - Simulated auth service and request runner
//!
//! # Usage
//!
//! ```rust,no_run
//! use authdeck::egui_app::{AppContext, AppState, Config};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = AppContext::new(Config::load()?)?;
//! let mut state = AppState::new(context);
//! state.tick();
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode; all state lives on the UI thread
//! - **Requests**: service futures run on a one-worker tokio runtime and report back over a channel

/// Shared types and data structures
pub mod shared;

/// egui native app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
