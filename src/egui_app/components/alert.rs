//! Modal alerts
//!
//! Screens push `{title, message}` pairs; the app shows the oldest one as a
//! centred modal until it is acknowledged.

use std::collections::VecDeque;

use eframe::egui;

use crate::egui_app::theme::colors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// FIFO of alerts waiting to be acknowledged
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    pending: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        tracing::info!("[ALERT] {}: {}", alert.title, alert.message);
        self.pending.push_back(alert);
    }

    /// Alert currently on screen
    pub fn current(&self) -> Option<&Alert> {
        self.pending.front()
    }

    /// Acknowledge the alert on screen
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Show the oldest alert, if any, with a single acknowledge button.
pub fn show(ctx: &egui::Context, alerts: &mut AlertQueue, ok_label: &str) {
    let Some(alert) = alerts.current().cloned() else {
        return;
    };

    let mut acknowledged = false;
    egui::Window::new(egui::RichText::new(&alert.title).strong().color(colors::TEXT_PRIMARY))
        .id(egui::Id::new("alert_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(280.0);
            ui.label(egui::RichText::new(&alert.message).size(16.0).color(colors::TEXT_SECONDARY));
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new(ok_label).strong().color(colors::PRIMARY))
                    .clicked()
                {
                    acknowledged = true;
                }
            });
        });

    if acknowledged {
        alerts.dismiss();
    }
}
