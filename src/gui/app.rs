//! Heart Risk Predictor Main Application
//! Main window with the input form and the result panel.

use crate::charts::{GaugeExporter, DEFAULT_SIZE};
use crate::gui::{FormAction, InputForm, ResultPanel};
use crate::prediction::{PredictOutcome, PredictionClient, PredictionController};
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// Main application window.
pub struct PredictorApp {
    client: Arc<dyn PredictionClient>,
    form: InputForm,
    controller: PredictionController,

    // Request in flight
    result_rx: Option<Receiver<PredictOutcome>>,
    is_predicting: bool,
}

impl PredictorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, client: Arc<dyn PredictionClient>) -> Self {
        Self {
            client,
            form: InputForm::new(),
            controller: PredictionController::new(),
            result_rx: None,
            is_predicting: false,
        }
    }

    /// Send the current form values on a background thread
    fn start_prediction(&mut self) {
        if self.is_predicting {
            return;
        }

        let input = self.form.patient_input();
        let client = Arc::clone(&self.client);

        let (tx, rx) = channel();
        self.result_rx = Some(rx);
        self.is_predicting = true;
        self.form.set_status("Sending request...");

        thread::spawn(move || {
            let outcome = PredictionController::submit(client.as_ref(), &input);
            let _ = tx.send(outcome);
        });
    }

    /// Check for the outcome of the request in flight
    fn check_prediction_result(&mut self) {
        let Some(rx) = self.result_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.controller.apply(outcome);
                self.is_predicting = false;
                let status = if self.controller.is_error() {
                    "Request failed"
                } else {
                    "Prediction complete"
                };
                self.form.set_status(status);
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                // Put receiver back, still waiting
                self.result_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.controller.apply(Err(crate::prediction::PredictError::Transport(
                    "request worker stopped unexpectedly".to_string(),
                )));
                self.is_predicting = false;
                self.form.set_status("Request failed");
            }
        }
    }

    /// Save the current gauge as a PNG
    fn handle_export_gauge(&mut self) {
        let Some(chart) = self.controller.gauge().current() else {
            self.form.set_status("No gauge to export");
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("risk_gauge.png")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match GaugeExporter::export_png(chart.data(), &output_path, DEFAULT_SIZE) {
            Ok(()) => {
                self.form
                    .set_status(&format!("Gauge exported: {}", output_path.display()));
            }
            Err(e) => {
                log::error!("Gauge export failed: {}", e);
                self.form.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_prediction_result();

        // Keep polling while the request is in flight
        if self.is_predicting {
            ctx.request_repaint();
        }

        // Left panel - Input Form
        SidePanel::left("input_form")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let can_export = self.controller.gauge().current().is_some();
                    let action = self.form.show(ui, self.is_predicting, can_export);

                    match action {
                        FormAction::Predict => self.start_prediction(),
                        FormAction::ExportGauge => self.handle_export_gauge(),
                        FormAction::None => {}
                    }
                });
            });

        // Central panel - Result
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ResultPanel::show(ui, &self.controller);
            });
        });
    }
}
