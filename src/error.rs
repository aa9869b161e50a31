//! loanrisk error types

/// loanrisk error types
#[derive(Debug, thiserror::Error)]
pub enum LoanRiskError {
    // Input validation errors
    #[error("invalid feature value: '{token}' is not a number")]
    InvalidFeature { token: String },

    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    // Service/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered with a success status but a body we could not read.
    #[error("malformed response: {0}")]
    Decode(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl LoanRiskError {
    /// Whether this error was raised while checking user input, before any
    /// request was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LoanRiskError::InvalidFeature { .. } | LoanRiskError::FeatureCount { .. }
        )
    }

    /// The message shown to the person filling in the form.
    ///
    /// Validation errors and service-provided details are shown as-is;
    /// transport and decoding failures get a generic prefix.
    pub fn user_message(&self) -> String {
        match self {
            LoanRiskError::InvalidFeature { .. } | LoanRiskError::FeatureCount { .. } => {
                self.to_string()
            }
            LoanRiskError::Api { message, .. } => message.clone(),
            LoanRiskError::Http(cause) => {
                format!("Unable to reach the prediction service: {cause}")
            }
            LoanRiskError::Decode(cause) => {
                format!("Unexpected response from the prediction service: {cause}")
            }
            LoanRiskError::Json(err) => {
                format!("Unexpected response from the prediction service: {err}")
            }
            LoanRiskError::Configuration(_) => self.to_string(),
        }
    }
}

/// Result type alias for loanrisk operations
pub type Result<T> = std::result::Result<T, LoanRiskError>;
