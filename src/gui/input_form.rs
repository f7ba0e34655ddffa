//! Input Form Widget
//! Left side panel with the eight patient fields and action buttons.

use crate::prediction::{
    PatientInput, CHEST_PAIN_OPTIONS, EXERCISE_ANGINA_OPTIONS, SEX_OPTIONS, ST_SLOPE_OPTIONS,
};
use egui::{Color32, ComboBox, RichText};

const LABEL_WIDTH: f32 = 120.0;
const FIELD_WIDTH: f32 = 150.0;

/// Left side form. Values are kept exactly as typed.
pub struct InputForm {
    pub input: PatientInput,
    pub status: String,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            input: PatientInput::default(),
            status: "Ready".to_string(),
        }
    }
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current field values.
    pub fn patient_input(&self) -> PatientInput {
        self.input.clone()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(label));
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(FIELD_WIDTH),
            );
        });
    }

    fn choice_row(ui: &mut egui::Ui, id: &str, label: &str, value: &mut String, options: &[&str]) {
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(label));
            ComboBox::from_id_salt(id)
                .width(FIELD_WIDTH)
                .selected_text(value.as_str())
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(value, option.to_string(), *option);
                    }
                });
        });
    }

    /// Draw the form. `busy` disables Predict while a request is in flight.
    pub fn show(&mut self, ui: &mut egui::Ui, busy: bool, can_export: bool) -> FormAction {
        let mut action = FormAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("❤ Heart Risk Predictor")
                    .size(22.0)
                    .color(Color32::from_rgb(255, 99, 132)),
            );
            ui.label(
                RichText::new("Heart attack risk estimate")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Patient Section =====
        ui.label(RichText::new("🩺 Patient Data").size(14.0).strong());
        ui.add_space(8.0);

        let input = &mut self.input;
        Self::text_row(ui, "Age:", &mut input.age, "years");
        ui.add_space(5.0);
        Self::choice_row(ui, "sex", "Sex:", &mut input.sex, &SEX_OPTIONS);
        ui.add_space(5.0);
        Self::text_row(ui, "Cholesterol:", &mut input.cholesterol, "mg/dl");
        ui.add_space(5.0);
        Self::text_row(ui, "Max Heart Rate:", &mut input.max_hr, "bpm");
        ui.add_space(5.0);
        Self::text_row(ui, "Oldpeak:", &mut input.oldpeak, "ST depression");
        ui.add_space(5.0);
        Self::choice_row(
            ui,
            "exercise_angina",
            "Exercise Angina:",
            &mut input.exercise_angina,
            &EXERCISE_ANGINA_OPTIONS,
        );
        ui.add_space(5.0);
        Self::choice_row(
            ui,
            "chest_pain",
            "Chest Pain Type:",
            &mut input.chest_pain,
            &CHEST_PAIN_OPTIONS,
        );
        ui.add_space(5.0);
        Self::choice_row(ui, "st_slope", "ST Slope:", &mut input.st_slope, &ST_SLOPE_OPTIONS);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(!busy, |ui| {
                let button = egui::Button::new(RichText::new("▶ Predict").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = FormAction::Predict;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(can_export, |ui| {
                let export_button = egui::Button::new(RichText::new("🖼 Export Gauge").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(export_button).clicked() {
                    action = FormAction::ExportGauge;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Waiting for service...").size(11.0));
            });
        } else {
            let status_color = if self.status.starts_with("Error") {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        }

        action
    }
}

/// Actions triggered by the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    None,
    Predict,
    ExportGauge,
}
