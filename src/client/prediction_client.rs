//! HTTP client for the loan-default prediction endpoint.
//!
//! The service takes `POST {"features": [...]}` and answers with
//! `{"prediction": 0|1, "default_probability": p}`. Failures carry a
//! `detail` field, either a plain string or a list of validation entries.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::telemetry;
use crate::traits::PredictionService;
use crate::{FeatureVector, LoanRiskError, PredictionResult, Result};

/// Default prediction endpoint (the service's `POST /predict` route on a local
/// uvicorn instance).
pub const DEFAULT_URL: &str = "http://127.0.0.1:8000/predict";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`PredictionClient`].
///
/// ```rust
/// # use loanrisk::ClientConfig;
/// # use std::time::Duration;
/// let config = ClientConfig::with_url("http://scoring.internal/predict")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.url, "http://scoring.internal/predict");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the prediction endpoint.
    pub url: String,
    /// Upper bound on a whole request, connect to last byte.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Config for a custom URL with the default timeout.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the prediction endpoint.
#[derive(Clone)]
pub struct PredictionClient {
    http: Client,
    url: String,
}

impl PredictionClient {
    /// Build a client from the given settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                LoanRiskError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Client for `url` with default settings (handy for tests against wiremock).
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_url(url))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one feature vector and decode the prediction.
    pub async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult> {
        let start = Instant::now();
        let result = self.send(features).await;
        record_request(start, result.is_ok());
        if let Err(ref e) = result {
            warn!(url = %self.url, error = %e, "prediction request failed");
        }
        result
    }

    async fn send(&self, features: &FeatureVector) -> Result<PredictionResult> {
        debug!(url = %self.url, "sending prediction request");

        let response = self
            .http
            .post(&self.url)
            .json(&PredictRequest {
                features: features.as_slice(),
            })
            .send()
            .await
            .map_err(|e| LoanRiskError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still leaves the status line to report.
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoanRiskError::Http(e.to_string()))?;

        let result: PredictionResult =
            serde_json::from_str(&body).map_err(|e| LoanRiskError::Decode(e.to_string()))?;
        debug!(
            prediction = result.prediction,
            probability = result.default_probability,
            "prediction received"
        );
        Ok(result)
    }
}

/// Map a non-success response to an error, preferring the service's own
/// `detail` text over the status line.
fn api_error(status: StatusCode, body: &str) -> LoanRiskError {
    let message = detail_message(body).unwrap_or_else(|| match status.canonical_reason() {
        Some(reason) => format!("Request failed: {} {reason}", status.as_u16()),
        None => format!("Request failed: {}", status.as_u16()),
    });
    LoanRiskError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Pull a readable message out of an error body.
///
/// A string `detail` is returned verbatim. A list `detail` (request
/// validation failures) is flattened to its `msg` entries.
fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn record_request(start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "service" => SERVICE_NAME,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "service" => SERVICE_NAME,
    )
    .record(start.elapsed().as_secs_f64());
}

const SERVICE_NAME: &str = "http";

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a [f64],
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

#[async_trait]
impl PredictionService for PredictionClient {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult> {
        PredictionClient::predict(self, features).await
    }
}
