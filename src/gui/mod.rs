//! GUI module - User interface components

mod app;
mod input_form;
mod result_panel;

pub use app::PredictorApp;
pub use input_form::{FormAction, InputForm};
pub use result_panel::ResultPanel;
