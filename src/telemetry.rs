//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `loanrisk_`. Counters end in `_total`,
//! histograms carry their unit in the name.
//!
//! # Common labels
//!
//! - `service` — name of the [`PredictionService`](crate::PredictionService)
//! - `status` — outcome: "ok" or "error"
//! - `reason` — why a submission ended early: "busy" or "validation"

/// Prediction requests sent to the service.
///
/// Labels: `service`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "loanrisk_requests_total";

/// Prediction request duration in seconds.
///
/// Labels: `service`.
pub const REQUEST_DURATION_SECONDS: &str = "loanrisk_request_duration_seconds";

/// Submissions that never reached the service.
///
/// Labels: `reason` ("busy" | "validation").
pub const SUBMISSIONS_REJECTED_TOTAL: &str = "loanrisk_submissions_rejected_total";
