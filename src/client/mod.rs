//! Client library for the remote prediction service.
//!
//! Provides [`PredictionClient`], which implements
//! [`PredictionService`](crate::PredictionService) over HTTP.

mod prediction_client;

pub use prediction_client::{ClientConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, PredictionClient};
