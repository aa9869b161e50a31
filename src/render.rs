//! Terminal rendering of form state.

use serde::Serialize;

use crate::{PredictionResult, Result, RiskLevel, UiState};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Whether rendered text may contain ANSI colour codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    Ansi,
}

/// Display form of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// "Default Risk" or "Safe Loan".
    pub headline: &'static str,
    /// Whether the service classified the applicant as likely to default.
    pub is_default: bool,
    pub prediction: i64,
    pub default_probability: f64,
    /// Probability as a percentage with one decimal, e.g. "82.0%".
    pub percentage: String,
    pub risk: RiskLevel,
}

impl Report {
    pub fn new(result: &PredictionResult) -> Self {
        let is_default = result.is_default();
        let headline = if is_default {
            "Default Risk"
        } else {
            "Safe Loan"
        };
        Self {
            headline,
            is_default,
            prediction: result.prediction,
            default_probability: result.default_probability,
            percentage: format!("{:.1}%", result.default_probability * 100.0),
            risk: result.risk_level(),
        }
    }

    pub fn render(&self, style: Style) -> String {
        let headline_color = if self.is_default {
            RED
        } else {
            GREEN
        };
        format!(
            "{}\nDefault probability: {}\n{}",
            paint(style, &[BOLD, headline_color], self.headline),
            self.percentage,
            paint(style, &[risk_color(self.risk)], self.risk.label()),
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Text shown for a form state.
pub fn render_state(state: &UiState, style: Style) -> String {
    match state {
        UiState::Idle => "Ready.".to_string(),
        UiState::Loading => "Predicting...".to_string(),
        UiState::Success(result) => Report::new(result).render(style),
        UiState::Error(message) => paint(style, &[RED], &format!("Error: {message}")),
    }
}

fn risk_color(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => GREEN,
        RiskLevel::Medium => YELLOW,
        RiskLevel::High => RED,
    }
}

fn paint(style: Style, codes: &[&str], text: &str) -> String {
    match style {
        Style::Plain => text.to_string(),
        Style::Ansi => format!("{}{text}{RESET}", codes.concat()),
    }
}
