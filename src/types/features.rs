//! Feature vector parsing.

use std::str::FromStr;

use serde::Serialize;

use crate::{LoanRiskError, Result};

/// Number of features the prediction service expects.
pub const FEATURE_COUNT: usize = 46;

/// The fixed-length numeric input sent to the prediction service.
///
/// Always holds exactly [`FEATURE_COUNT`] finite values. The only ways to
/// build one are [`FeatureVector::parse`] and [`FeatureVector::from_values`],
/// both of which check the invariant.
///
/// ```rust
/// # use loanrisk::FeatureVector;
/// let text = vec!["0.5"; 46].join(", ");
/// let features = FeatureVector::parse(&text).unwrap();
/// assert_eq!(features.as_slice().len(), 46);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Parse comma-separated text into a feature vector.
    ///
    /// Each token is trimmed and parsed as `f64`. The first token that is not
    /// a finite number is reported; only then is the count checked. Nothing
    /// is returned unless every token is valid and there are exactly
    /// [`FEATURE_COUNT`] of them.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(LoanRiskError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: 0,
            });
        }

        let values = raw
            .split(',')
            .map(|token| parse_token(token.trim()))
            .collect::<Result<Vec<_>>>()?;

        Self::from_values(values)
    }

    /// Wrap already-numeric values, checking length and finiteness.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(LoanRiskError::InvalidFeature {
                token: bad.to_string(),
            });
        }
        if values.len() != FEATURE_COUNT {
            return Err(LoanRiskError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

fn parse_token(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LoanRiskError::InvalidFeature {
            token: token.to_string(),
        }),
    }
}

impl FromStr for FeatureVector {
    type Err = LoanRiskError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = LoanRiskError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(values)
    }
}
