//! Core PredictionService trait

use std::sync::Arc;

use async_trait::async_trait;

use crate::{FeatureVector, PredictionResult, Result};

/// Something that can score a feature vector.
///
/// [`PredictionClient`](crate::PredictionClient) implements this over HTTP;
/// a [`Session`](crate::Session) only depends on the trait, so it can be
/// driven by any implementation.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Name used in logs and metric labels.
    fn name(&self) -> &str;

    /// Score one feature vector.
    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult>;
}

#[async_trait]
impl<T: PredictionService + ?Sized> PredictionService for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult> {
        (**self).predict(features).await
    }
}
