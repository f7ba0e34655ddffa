//! Prediction Client Module
//! Posts patient input to the remote service and decodes its answer.

use crate::prediction::{ErrorResult, PatientInput, PredictionResult};
use thiserror::Error;

/// Fixed path of the prediction endpoint on the service
pub const PREDICT_PATH: &str = "/predict";

/// Default server, matching the service's default port
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:10000";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// Service answered with a failure status and its own message
    #[error("{0}")]
    Service(String),
    /// Request never completed or the body could not be decoded
    #[error("{0}")]
    Transport(String),
}

/// Anything that can turn a patient record into a prediction.
pub trait PredictionClient: Send + Sync {
    fn predict(&self, input: &PatientInput) -> Result<PredictionResult, PredictError>;
}

/// Blocking HTTP client for the `/predict` endpoint.
pub struct HttpPredictionClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(server: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            endpoint: Self::endpoint_for(server),
        }
    }

    /// Join a server base URL with the prediction path.
    pub fn endpoint_for(server: &str) -> String {
        format!("{}{}", server.trim_end_matches('/'), PREDICT_PATH)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn service_error(response: ureq::Response) -> PredictError {
        match response.into_json::<ErrorResult>() {
            Ok(body) => PredictError::Service(body.error),
            Err(e) => PredictError::Transport(e.to_string()),
        }
    }
}

impl PredictionClient for HttpPredictionClient {
    fn predict(&self, input: &PatientInput) -> Result<PredictionResult, PredictError> {
        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(input);

        match result {
            Ok(response) if (200..300).contains(&response.status()) => response
                .into_json::<PredictionResult>()
                .map_err(|e| PredictError::Transport(e.to_string())),
            // 1xx/3xx that ureq did not follow
            Ok(response) => Err(Self::service_error(response)),
            Err(ureq::Error::Status(_, response)) => Err(Self::service_error(response)),
            Err(ureq::Error::Transport(transport)) => {
                Err(PredictError::Transport(transport.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    struct CapturedRequest {
        head: String,
        body: String,
    }

    /// Serve exactly one canned response, returning what the client sent.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                let lower = line.to_ascii_lowercase();
                if let Some(value) = lower.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                head.push_str(&line);
            }

            let mut raw_body = vec![0u8; content_length];
            reader.read_exact(&mut raw_body).unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            CapturedRequest {
                head,
                body: String::from_utf8(raw_body).unwrap(),
            }
        });

        (format!("http://{}", addr), handle)
    }

    fn sample_input() -> PatientInput {
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

    #[test]
    fn endpoint_joins_server_and_path() {
        assert_eq!(
            HttpPredictionClient::endpoint_for("http://localhost:10000"),
            "http://localhost:10000/predict"
        );
        assert_eq!(
            HttpPredictionClient::endpoint_for("http://localhost:10000//"),
            "http://localhost:10000/predict"
        );
    }

    #[test]
    fn posts_json_and_decodes_success() {
        let (server, handle) = serve_once("200 OK", r#"{"prediction":"Low Risk","risk_score":0.23}"#);
        let client = HttpPredictionClient::new(&server);

        let result = client.predict(&sample_input()).unwrap();
        assert_eq!(result.prediction, "Low Risk");
        assert!((result.risk_score - 0.23).abs() < 1e-12);

        let request = handle.join().unwrap();
        assert!(request.head.starts_with("POST /predict HTTP/1.1"));
        assert!(request
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/json"));

        let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(sent, serde_json::to_value(sample_input()).unwrap());
    }

    #[test]
    fn failure_status_becomes_service_error() {
        let (server, handle) = serve_once("400 Bad Request", r#"{"error":"missing field Sex"}"#);
        let client = HttpPredictionClient::new(&server);

        let err = client.predict(&sample_input()).unwrap_err();
        assert_eq!(err, PredictError::Service("missing field Sex".into()));
        assert_eq!(err.to_string(), "missing field Sex");
        handle.join().unwrap();
    }

    #[test]
    fn malformed_success_body_is_transport_error() {
        let (server, handle) = serve_once("200 OK", "not json");
        let client = HttpPredictionClient::new(&server);

        let err = client.predict(&sample_input()).unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
        handle.join().unwrap();
    }

    #[test]
    fn malformed_error_body_is_transport_error() {
        let (server, handle) = serve_once("500 Internal Server Error", "<html>oops</html>");
        let client = HttpPredictionClient::new(&server);

        let err = client.predict(&sample_input()).unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
        handle.join().unwrap();
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = HttpPredictionClient::new(&format!("http://{}", addr));

        let err = client.predict(&sample_input()).unwrap_err();
        match err {
            PredictError::Transport(message) => assert!(!message.is_empty()),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
