//! Public types for the loanrisk API.

mod features;
mod prediction;
mod state;

pub use features::{FEATURE_COUNT, FeatureVector};
pub use prediction::{
    DEFAULT_CLASS, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, PredictionResult, RiskLevel,
};
pub use state::{SubmitOutcome, UiState};
