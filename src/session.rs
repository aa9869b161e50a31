//! The submit cycle of the prediction form.
//!
//! A [`Session`] owns the form's [`UiState`] and the guarantee that at most
//! one prediction request is in flight. State lives in a
//! [`tokio::sync::watch`] channel so a front end can redraw on every
//! transition while the submitting task awaits the service.

use tokio::sync::watch;
use tracing::{debug, info};

use crate::telemetry;
use crate::traits::PredictionService;
use crate::{FeatureVector, Result, SubmitOutcome, UiState};

/// One form instance bound to a prediction service.
///
/// ```rust,no_run
/// # use loanrisk::{PredictionClient, Session, SubmitOutcome};
/// # async fn demo(input: &str) -> loanrisk::Result<()> {
/// let session = Session::new(PredictionClient::with_url("http://127.0.0.1:8000/predict")?);
/// if let SubmitOutcome::Completed(state) = session.submit(input).await {
///     println!("{state:?}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Session<S> {
    service: S,
    state: watch::Sender<UiState>,
}

impl<S: PredictionService> Session<S> {
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(UiState::Idle);
        Self { service, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Whether a submission is in flight (the submit control is disabled).
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run one submission of `raw` form text.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without touching anything when a
    /// previous submission is still loading. Otherwise clears the previous
    /// result, parses the input (no request is made if parsing fails), calls
    /// the service and leaves the session in `Success` or `Error`.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let Some(guard) = self.begin() else {
            debug!("submission ignored, request already in flight");
            metrics::counter!(telemetry::SUBMISSIONS_REJECTED_TOTAL, "reason" => "busy")
                .increment(1);
            return SubmitOutcome::Ignored;
        };

        let next = match self.run(raw).await {
            Ok(result) => {
                info!(
                    prediction = result.prediction,
                    probability = result.default_probability,
                    "prediction complete"
                );
                UiState::Success(result)
            }
            Err(e) => {
                if e.is_validation() {
                    metrics::counter!(
                        telemetry::SUBMISSIONS_REJECTED_TOTAL,
                        "reason" => "validation"
                    )
                    .increment(1);
                }
                debug!(error = %e, "submission failed");
                UiState::Error(e.user_message())
            }
        };

        guard.finish(next.clone());
        SubmitOutcome::Completed(next)
    }

    async fn run(&self, raw: &str) -> Result<crate::PredictionResult> {
        let features = FeatureVector::parse(raw)?;
        debug!(service = self.service.name(), "input parsed, calling service");
        self.service.predict(&features).await
    }

    /// Atomically move to `Loading` unless already there.
    fn begin(&self) -> Option<LoadingGuard<'_>> {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = UiState::Loading;
                true
            }
        });
        started.then_some(LoadingGuard {
            state: &self.state,
            finished: false,
        })
    }
}

/// Leaves `Loading` when dropped, so a submission future that is dropped
/// mid-request does not keep the form disabled.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<UiState>,
    finished: bool,
}

impl LoadingGuard<'_> {
    fn finish(mut self, next: UiState) {
        self.finished = true;
        self.state.send_replace(next);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.state.send_replace(UiState::Idle);
        }
    }
}
