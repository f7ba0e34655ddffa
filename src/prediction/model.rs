//! Prediction Data Model
//! Request and response records exchanged with the prediction service.

use serde::{Deserialize, Serialize};

/// Sex options offered by the form
pub const SEX_OPTIONS: [&str; 2] = ["M", "F"];
/// Exercise-induced angina options
pub const EXERCISE_ANGINA_OPTIONS: [&str; 2] = ["N", "Y"];
/// Chest pain types known to the service
pub const CHEST_PAIN_OPTIONS: [&str; 4] = ["ATA", "NAP", "ASY", "TA"];
/// ST segment slope options
pub const ST_SLOPE_OPTIONS: [&str; 3] = ["Up", "Flat", "Down"];

/// The eight clinical form values sent to the service.
///
/// Every field is carried verbatim as a string; the service owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInput {
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Cholesterol")]
    pub cholesterol: String,
    #[serde(rename = "MaxHR")]
    pub max_hr: String,
    #[serde(rename = "Oldpeak")]
    pub oldpeak: String,
    #[serde(rename = "ExerciseAngina")]
    pub exercise_angina: String,
    #[serde(rename = "ChestPainType")]
    pub chest_pain: String,
    #[serde(rename = "ST_Slope")]
    pub st_slope: String,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            age: String::new(),
            sex: SEX_OPTIONS[0].to_string(),
            cholesterol: String::new(),
            max_hr: String::new(),
            oldpeak: String::new(),
            exercise_angina: EXERCISE_ANGINA_OPTIONS[0].to_string(),
            chest_pain: CHEST_PAIN_OPTIONS[0].to_string(),
            st_slope: ST_SLOPE_OPTIONS[0].to_string(),
        }
    }
}

/// Successful answer from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub risk_score: f64,
}

/// Failure body returned with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}
