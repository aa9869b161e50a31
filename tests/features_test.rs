//! Input parsing properties of [`FeatureVector`].

use loanrisk::{FEATURE_COUNT, FeatureVector, LoanRiskError};

fn numbers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}.25", i)).collect()
}

#[test]
fn exactly_46_numbers_parse_in_order() {
    let tokens = numbers(FEATURE_COUNT);
    let features = FeatureVector::parse(&tokens.join(",")).unwrap();

    let values = features.as_slice();
    assert_eq!(values.len(), FEATURE_COUNT);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(*v, i as f64 + 0.25);
    }
}

#[test]
fn whitespace_around_tokens_is_ignored() {
    let tokens = numbers(FEATURE_COUNT);
    let text = format!("  {}\n", tokens.join(" ,\t "));
    let features: FeatureVector = text.parse().unwrap();
    assert_eq!(features.as_slice()[1], 1.25);
}

#[test]
fn scientific_and_signed_numbers_are_accepted() {
    let mut tokens = vec!["0".to_string(); FEATURE_COUNT];
    tokens[0] = "-3.5".into();
    tokens[1] = "+2".into();
    tokens[2] = "1e3".into();
    let features = FeatureVector::parse(&tokens.join(",")).unwrap();
    assert_eq!(&features.as_slice()[..3], &[-3.5, 2.0, 1000.0]);
}

#[test]
fn non_numeric_token_is_named() {
    let mut tokens = numbers(FEATURE_COUNT);
    tokens[10] = "abc".into();
    let err = FeatureVector::parse(&tokens.join(",")).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err, LoanRiskError::InvalidFeature { ref token } if token == "abc"));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn bad_token_reported_even_when_count_is_wrong() {
    let err = FeatureVector::parse("1, 2, three").unwrap_err();
    assert!(err.to_string().contains("three"));
}

#[test]
fn too_few_numbers_reports_actual_count() {
    let err = FeatureVector::parse(&numbers(45).join(",")).unwrap_err();
    assert!(matches!(
        err,
        LoanRiskError::FeatureCount {
            expected: 46,
            actual: 45
        }
    ));
    assert!(err.to_string().contains("45"));
}

#[test]
fn too_many_numbers_reports_actual_count() {
    let err = FeatureVector::parse(&numbers(47).join(",")).unwrap_err();
    assert!(err.to_string().contains("got 47"));
}

#[test]
fn trailing_comma_is_an_empty_token() {
    let text = format!("{},", numbers(FEATURE_COUNT).join(","));
    let err = FeatureVector::parse(&text).unwrap_err();
    assert!(matches!(err, LoanRiskError::InvalidFeature { ref token } if token.is_empty()));
}
