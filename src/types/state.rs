//! Form state types

use super::prediction::PredictionResult;

/// What the form is currently showing.
///
/// Moves `Idle → Loading` on submit, `Loading → Success | Error` when the
/// submission finishes, and back to `Loading` on the next submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of asking a session to submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The submission ran; carries the state it finished in.
    Completed(UiState),
    /// Another submission was already in flight, nothing was done.
    Ignored,
}

impl SubmitOutcome {
    pub fn state(&self) -> Option<&UiState> {
        match self {
            SubmitOutcome::Completed(state) => Some(state),
            SubmitOutcome::Ignored => None,
        }
    }
}
