//! egui Native App Module
//!
//! Sign in, sign up, forgot password and home screens on top of a small
//! auth store.
//!
//! # Architecture
//!
//! - **`auth`** - Auth store: state plus the four login actions
//! - **`navigation`** - Route selector and the mounted screen
//! - **`service`** - Auth service seam and its simulated implementation
//! - **`tasks`** - Background requests with cancellation
//! - **`state`** - App context handed to every screen
//! - **`views`** - The four screens
//! - **`components`** - Button, text field, language toggle, alerts
//! - **`forms`** - Per-field value and error state
//! - **`i18n`** - English and Turkish tables
//! - **`config`** - Config file and environment loading
//! - **`theme`** - Colors and frames
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Main application entry point
//! ├── auth.rs       - Auth store
//! ├── navigation.rs - Route selector
//! ├── service.rs    - Auth service
//! ├── tasks.rs      - Request runner
//! ├── state/        - App context and state
//! ├── views/        - Screens
//! ├── components/   - UI primitives
//! ├── i18n/         - Translations
//! └── theme/        - Colors and styles
//! ```

pub mod auth;
pub mod components;
pub mod config;
pub mod forms;
pub mod i18n;
pub mod navigation;
pub mod service;
pub mod state;
pub mod tasks;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use auth::{AuthPhase, AuthState, AuthStore};
pub use config::Config;
pub use i18n::Localizer;
pub use navigation::{ActiveScreen, Navigator};
pub use service::{AuthService, SimulatedAuthService};
pub use state::{AppContext, AppState, StartupError};
pub use types::{Route, User};
