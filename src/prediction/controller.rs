//! Prediction Controller
//! Turns one submission into the three display regions: result text,
//! gauge chart and suggestion list.

use crate::charts::GaugeSlot;
use crate::prediction::{PatientInput, PredictError, PredictionClient, PredictionResult, Suggestions};

/// Outcome of a single request
pub type PredictOutcome = Result<PredictionResult, PredictError>;

/// Display state for the prediction view.
#[derive(Debug, Default)]
pub struct PredictionController {
    result_text: String,
    suggestions: Option<Suggestions>,
    gauge: GaugeSlot,
    failed: bool,
}

impl PredictionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send one request. Blocks until the service answers or the transport fails.
    pub fn submit(client: &dyn PredictionClient, input: &PatientInput) -> PredictOutcome {
        log::info!("Submitting prediction request");
        client.predict(input)
    }

    /// Update the display regions from an outcome. Never fails.
    pub fn apply(&mut self, outcome: PredictOutcome) {
        match outcome {
            Ok(result) => {
                log::info!(
                    "Prediction received: {} (risk score {:.3})",
                    result.prediction,
                    result.risk_score
                );
                self.failed = false;
                self.result_text = result.prediction.clone();
                self.render_gauge(result.risk_score);
                self.render_suggestions(&result.prediction);
            }
            Err(err) => {
                match &err {
                    PredictError::Service(message) => {
                        log::warn!("Prediction service rejected request: {}", message)
                    }
                    PredictError::Transport(message) => {
                        log::error!("Prediction request failed: {}", message)
                    }
                }
                self.failed = true;
                self.result_text = format!("Error: {}", err);
                self.suggestions = None;
            }
        }
    }

    /// Submit and apply in one step.
    pub fn run(&mut self, client: &dyn PredictionClient, input: &PatientInput) {
        let outcome = Self::submit(client, input);
        self.apply(outcome);
    }

    pub fn render_gauge(&mut self, risk_score: f64) {
        self.gauge.replace(risk_score);
    }

    pub fn render_suggestions(&mut self, label: &str) {
        self.suggestions = Some(Suggestions::for_label(label));
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// `None` when the region is cleared.
    pub fn suggestions(&self) -> Option<Suggestions> {
        self.suggestions
    }

    pub fn gauge(&self) -> &GaugeSlot {
        &self.gauge
    }

    /// Whether the last outcome was a failure.
    pub fn is_error(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Mutex, Once};

    /// Records every log message so tests can inspect the diagnostic channel.
    struct CaptureLogger;

    static LOGGED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            LOGGED
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    fn init_logger() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Debug);
        });
    }

    fn error_entries_containing(marker: &str) -> usize {
        LOGGED
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, message)| *level == log::Level::Error && message.contains(marker))
            .count()
    }

    /// Answers every request with a fixed outcome and counts calls.
    struct StubClient {
        outcome: PredictOutcome,
        calls: Mutex<Vec<PatientInput>>,
    }

    impl StubClient {
        fn new(outcome: PredictOutcome) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl PredictionClient for StubClient {
        fn predict(&self, input: &PatientInput) -> PredictOutcome {
            self.calls.lock().unwrap().push(input.clone());
            self.outcome.clone()
        }
    }

    fn scenario_input() -> PatientInput {
        PatientInput {
            age: "52".into(),
            sex: "M".into(),
            cholesterol: "212".into(),
            max_hr: "168".into(),
            oldpeak: "1.0".into(),
            exercise_angina: "N".into(),
            chest_pain: "ATA".into(),
            st_slope: "Up".into(),
        }
    }

    fn success(label: &str, score: f64) -> PredictOutcome {
        Ok(PredictionResult {
            prediction: label.into(),
            risk_score: score,
        })
    }

    fn gauge_split(controller: &PredictionController) -> (f64, f64) {
        let data = controller.gauge().current().unwrap().data();
        (data.segments[0].value, data.segments[1].value)
    }

    #[test]
    fn low_risk_shows_label_gauge_and_maintenance() {
        let client = StubClient::new(success("Low Risk", 0.23));
        let mut controller = PredictionController::new();

        controller.run(&client, &scenario_input());

        assert_eq!(client.call_count(), 1);
        assert_eq!(client.calls.lock().unwrap()[0], scenario_input());
        assert_eq!(controller.result_text(), "Low Risk");
        let (risk, safe) = gauge_split(&controller);
        assert!((risk - 23.0).abs() < 1e-9);
        assert!((safe - 77.0).abs() < 1e-9);
        assert_eq!(controller.suggestions(), Some(Suggestions::Maintenance));
        assert!(!controller.is_error());
    }

    #[test]
    fn service_error_shows_message_and_clears_suggestions() {
        let client = StubClient::new(Err(PredictError::Service("missing field Sex".into())));
        let mut controller = PredictionController::new();
        controller.render_suggestions("Low Risk");

        controller.run(&client, &scenario_input());

        assert_eq!(client.call_count(), 1);
        assert_eq!(controller.result_text(), "Error: missing field Sex");
        assert_eq!(controller.suggestions(), None);
        assert!(controller.is_error());
    }

    #[test]
    fn transport_error_is_logged_once() {
        init_logger();
        let marker = "connection refused (transport test)";
        let client = StubClient::new(Err(PredictError::Transport(marker.into())));
        let mut controller = PredictionController::new();
        controller.render_suggestions("High Risk");

        controller.run(&client, &scenario_input());

        assert_eq!(controller.result_text(), format!("Error: {}", marker));
        assert_eq!(controller.suggestions(), None);
        assert_eq!(error_entries_containing(marker), 1);
    }

    #[test]
    fn high_risk_shows_urgent_list() {
        let client = StubClient::new(success("High Risk", 0.91));
        let mut controller = PredictionController::new();

        controller.run(&client, &scenario_input());

        assert_eq!(controller.result_text(), "High Risk");
        let (risk, safe) = gauge_split(&controller);
        assert!((risk - 91.0).abs() < 1e-9);
        assert!((safe - 9.0).abs() < 1e-9);
        assert_eq!(controller.suggestions(), Some(Suggestions::Urgent));
    }

    #[test]
    fn repeated_predictions_keep_one_gauge() {
        let mut controller = PredictionController::new();

        controller.apply(success("Low Risk", 0.23));
        controller.apply(success("High Risk", 0.91));

        assert_eq!(controller.gauge().live_instances(), 1);
        let (risk, _) = gauge_split(&controller);
        assert!((risk - 91.0).abs() < 1e-9);
    }

    #[test]
    fn errors_leave_previous_gauge_in_place() {
        let mut controller = PredictionController::new();
        controller.apply(success("Low Risk", 0.23));

        controller.apply(Err(PredictError::Service("bad input".into())));

        assert_eq!(controller.gauge().live_instances(), 1);
        assert_eq!(controller.result_text(), "Error: bad input");
    }

    #[test]
    fn empty_label_is_maintenance() {
        let mut controller = PredictionController::new();
        controller.apply(success("", 0.4));
        assert_eq!(controller.result_text(), "");
        assert_eq!(controller.suggestions(), Some(Suggestions::Maintenance));
    }
}
