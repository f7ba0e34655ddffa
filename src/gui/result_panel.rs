//! Result Panel Widget
//! Central area showing the prediction label, gauge and suggestions.

use crate::prediction::PredictionController;
use egui::{Color32, RichText};

const GAUGE_HEIGHT: f32 = 320.0;

/// Read-only view over the controller's display state.
pub struct ResultPanel;

impl ResultPanel {
    pub fn show(ui: &mut egui::Ui, controller: &PredictionController) {
        // ===== Result Text =====
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let text = controller.result_text();
            if text.is_empty() && controller.gauge().current().is_none() {
                ui.label(
                    RichText::new("Enter patient data and press Predict")
                        .size(16.0)
                        .color(Color32::GRAY),
                );
            } else {
                let color = if controller.is_error() {
                    Color32::from_rgb(220, 53, 69)
                } else {
                    ui.visuals().strong_text_color()
                };
                ui.label(RichText::new(text).size(24.0).strong().color(color));
            }
        });

        ui.add_space(10.0);

        // ===== Gauge =====
        if let Some(chart) = controller.gauge().current() {
            egui::Frame::none()
                .rounding(8.0)
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Risk Score").size(14.0).strong());
                    chart.show(ui, GAUGE_HEIGHT);
                });
            ui.add_space(15.0);
        }

        // ===== Suggestions =====
        if let Some(suggestions) = controller.suggestions() {
            ui.label(RichText::new("💡 Suggestions").size(14.0).strong());
            ui.add_space(5.0);
            for item in suggestions.items() {
                ui.horizontal(|ui| {
                    ui.label("•");
                    ui.label(RichText::new(*item).size(13.0));
                });
            }
        }
    }
}
