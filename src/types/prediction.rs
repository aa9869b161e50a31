//! Prediction response types

use serde::{Deserialize, Serialize};

/// Classification value the service uses for "likely to default".
pub const DEFAULT_CLASS: i64 = 1;

/// Probability at or above which the risk tier becomes medium.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.3;

/// Probability at or above which the risk tier becomes high.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Classification and probability returned by the prediction service.
///
/// Taken verbatim from the response body; both fields must be present but
/// their ranges are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: i64,
    pub default_probability: f64,
}

impl PredictionResult {
    pub fn new(prediction: i64, default_probability: f64) -> Self {
        Self {
            prediction,
            default_probability,
        }
    }

    /// Whether the service classified the applicant as likely to default.
    pub fn is_default(&self) -> bool {
        self.prediction == DEFAULT_CLASS
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_probability(self.default_probability)
    }
}

/// Qualitative tier of a default probability, used for display styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier a probability: below 0.3 is low, below 0.7 is medium, the rest
    /// (including NaN) is high.
    pub fn from_probability(probability: f64) -> Self {
        if probability < MEDIUM_RISK_THRESHOLD {
            RiskLevel::Low
        } else if probability < HIGH_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}
