//! Button primitive
//!
//! Every (variant, size, state) combination resolves to one [`ButtonStyle`]
//! through [`ButtonStyle::resolve`]; the widget only paints what it is given.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use crate::egui_app::theme::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Enabled,
    Disabled,
    /// Busy; shows a spinner and ignores clicks
    Loading,
}

impl ButtonState {
    /// Loading takes precedence over disabled.
    pub fn from_flags(loading: bool, disabled: bool) -> Self {
        if loading {
            ButtonState::Loading
        } else if disabled {
            ButtonState::Disabled
        } else {
            ButtonState::Enabled
        }
    }

    pub fn is_interactive(self) -> bool {
        self == ButtonState::Enabled
    }
}

/// Fully resolved visual parameters of a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    pub text_color: Color32,
    pub text_size: f32,
    pub min_height: f32,
    pub padding: egui::Vec2,
    pub opacity: f32,
    pub spinner: Option<Color32>,
}

impl ButtonStyle {
    pub fn resolve(variant: ButtonVariant, size: ButtonSize, state: ButtonState) -> Self {
        let (fill, stroke, text_color, spinner_color) = match variant {
            ButtonVariant::Primary => (colors::PRIMARY, Stroke::NONE, colors::TEXT_ON_FILL, colors::TEXT_ON_FILL),
            ButtonVariant::Secondary => (colors::SECONDARY, Stroke::NONE, colors::TEXT_ON_FILL, colors::TEXT_ON_FILL),
            ButtonVariant::Outline => (
                Color32::TRANSPARENT,
                Stroke::new(2.0, colors::PRIMARY),
                colors::PRIMARY,
                colors::PRIMARY,
            ),
        };

        let (text_size, min_height, padding) = match size {
            ButtonSize::Small => (14.0, 36.0, egui::vec2(16.0, 8.0)),
            ButtonSize::Medium => (16.0, 48.0, egui::vec2(24.0, 12.0)),
            ButtonSize::Large => (18.0, 56.0, egui::vec2(32.0, 16.0)),
        };

        let opacity = if state.is_interactive() { 1.0 } else { 0.6 };
        let spinner = (state == ButtonState::Loading).then_some(spinner_color);

        Self {
            fill,
            stroke,
            text_color,
            text_size,
            min_height,
            padding,
            opacity,
            spinner,
        }
    }
}

/// Themed button with variant, size and loading/disabled states
#[derive(Debug, Clone)]
pub struct AppButton {
    title: String,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    disabled: bool,
}

impl AppButton {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn state(&self) -> ButtonState {
        ButtonState::from_flags(self.loading, self.disabled)
    }

    pub fn style(&self) -> ButtonStyle {
        ButtonStyle::resolve(self.variant, self.size, self.state())
    }

    /// Paint the button. A disabled or loading button never reports a click.
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let style = self.style();
        let interactive = self.state().is_interactive();
        let width = ui.available_width();

        ui.scope(|ui| {
            ui.multiply_opacity(style.opacity);
            ui.spacing_mut().button_padding = style.padding;

            let text = egui::RichText::new(&self.title)
                .size(style.text_size)
                .strong()
                .color(style.text_color);
            let button = egui::Button::new(text)
                .fill(style.fill)
                .stroke(style.stroke)
                .corner_radius(CornerRadius::same(12))
                .min_size(egui::vec2(width, style.min_height));

            let response = ui.add_enabled(interactive, button);

            if let Some(color) = style.spinner {
                let size = style.text_size;
                let center = egui::pos2(response.rect.left() + style.padding.x, response.rect.center().y);
                egui::Spinner::new()
                    .size(size)
                    .color(color)
                    .paint_at(ui, egui::Rect::from_center_size(center, egui::vec2(size, size)));
            }

            response
        })
        .inner
    }
}
