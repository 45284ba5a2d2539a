//! Color Constants for the Auth Screens
//!
//! Light mobile palette: off-white background, white cards, iOS blue accents.

use eframe::egui::Color32;

/// Screen background - Off-white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF8, 0xF9, 0xFA);

/// Card and input background - White
pub const SURFACE: Color32 = Color32::WHITE;

/// Primary action - Blue
pub const PRIMARY: Color32 = Color32::from_rgb(0x00, 0x7A, 0xFF);

/// Secondary action - Slate gray
pub const SECONDARY: Color32 = Color32::from_rgb(0x6C, 0x75, 0x7D);

/// Text on filled buttons
pub const TEXT_ON_FILL: Color32 = Color32::WHITE;

/// Headings and labels
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Subtitles and muted text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

/// Placeholder text
pub const PLACEHOLDER: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);

/// Input and divider borders
pub const BORDER: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);

/// Row separators on cards
pub const SEPARATOR: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);

/// Error text, error borders, required marker
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x47, 0x57);

/// Google brand mark
pub const GOOGLE: Color32 = Color32::from_rgb(0x42, 0x85, 0xF4);

/// Facebook brand mark
pub const FACEBOOK: Color32 = Color32::from_rgb(0x18, 0x77, 0xF2);
