//! loanrisk - client for a remote loan-default prediction service
//!
//! The crate turns a line of 46 comma-separated numbers into a
//! [`FeatureVector`], sends it to the prediction endpoint and reports the
//! classification and default probability it returns. A [`Session`] drives
//! that cycle the way a submit form does: one request in flight at a time,
//! with the outcome exposed as a [`UiState`].
//!
//! # Example
//!
//! ```rust,no_run
//! use loanrisk::render::{Style, render_state};
//! use loanrisk::{PredictionClient, Session, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> loanrisk::Result<()> {
//!     let client = PredictionClient::with_url("http://127.0.0.1:8000/predict")?;
//!     let session = Session::new(client);
//!
//!     let input = vec!["0.0"; 46].join(",");
//!     if let SubmitOutcome::Completed(state) = session.submit(&input).await {
//!         println!("{}", render_state(&state, Style::Plain));
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use client::{ClientConfig, PredictionClient};
pub use error::{LoanRiskError, Result};
pub use session::Session;
pub use traits::PredictionService;
pub use version::{GIT_BRANCH, GIT_SHA, PKG_VERSION, version_string};

pub use types::{
    DEFAULT_CLASS, FEATURE_COUNT, FeatureVector, PredictionResult, RiskLevel, SubmitOutcome,
    UiState,
};
