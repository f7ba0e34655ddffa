//! Prediction module - service client, display state and suggestions

mod client;
mod controller;
mod model;
mod suggestions;

pub use client::{HttpPredictionClient, PredictError, PredictionClient, DEFAULT_SERVER};
pub use controller::{PredictOutcome, PredictionController};
pub use model::{
    ErrorResult, PatientInput, PredictionResult, CHEST_PAIN_OPTIONS, EXERCISE_ANGINA_OPTIONS,
    SEX_OPTIONS, ST_SLOPE_OPTIONS,
};
pub use suggestions::Suggestions;
