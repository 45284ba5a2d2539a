//! Theme Module
//!
//! Color scheme and frame builders shared by every screen.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     // Card content
//! });
//! ```

pub mod colors;
pub mod styles;
