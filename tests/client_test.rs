//! Wiremock integration tests for PredictionClient.
//!
//! These tests verify the request shape and the mapping of service
//! responses to results and errors.

use loanrisk::{FEATURE_COUNT, FeatureVector, LoanRiskError, PredictionClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_features() -> FeatureVector {
    FeatureVector::from_values((0..FEATURE_COUNT).map(|i| i as f64 / 10.0).collect()).unwrap()
}

fn client_for(server: &MockServer) -> PredictionClient {
    PredictionClient::with_url(format!("{}/predict", server.uri())).unwrap()
}

#[tokio::test]
async fn test_predict_success() {
    let mock_server = MockServer::start().await;
    let features = sample_features();

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "features": features.as_slice() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "prediction": 1,
            "default_probability": 0.82
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .predict(&features)
        .await
        .expect("predict should succeed");
    assert_eq!(result.prediction, 1);
    assert!((result.default_probability - 0.82).abs() < 1e-9);
}

#[tokio::test]
async fn test_detail_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({ "detail": "model unavailable" })),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .predict(&sample_features())
        .await
        .unwrap_err();
    match err {
        LoanRiskError::Api { status, ref message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "model unavailable");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "model unavailable");
}

#[tokio::test]
async fn test_validation_detail_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [
                { "loc": ["body", "features"], "msg": "field required", "type": "value_error.missing" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .predict(&sample_features())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "field required");
}

#[tokio::test]
async fn test_non_json_error_falls_back_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .predict(&sample_features())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Request failed: 500 Internal Server Error");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "prediction": 0 })),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .predict(&sample_features())
        .await
        .unwrap_err();
    assert!(matches!(err, LoanRiskError::Decode(_)));
    assert!(
        err.user_message()
            .starts_with("Unexpected response from the prediction service")
    );
}

#[tokio::test]
async fn test_unreachable_service() {
    // Grab a free port, then release it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = PredictionClient::with_url(format!("http://127.0.0.1:{port}/predict")).unwrap();
    let err = client.predict(&sample_features()).await.unwrap_err();
    assert!(matches!(err, LoanRiskError::Http(_)));
    assert!(
        err.user_message()
            .starts_with("Unable to reach the prediction service")
    );
}

#[tokio::test]
async fn test_truncated_error_body_falls_back_to_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Announce a 100-byte body, send a fragment, then hang up.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // Drain the request (ends with the JSON body's closing `]}`) before replying.
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request.ends_with(b"]}") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = socket
            .write_all(
                b"HTTP/1.1 503 Service Unavailable\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 100\r\n\r\n{\"detail\"",
            )
            .await;
        let _ = socket.shutdown().await;
    });

    let client = PredictionClient::with_url(format!("http://{addr}/predict")).unwrap();
    let err = client.predict(&sample_features()).await.unwrap_err();
    assert!(matches!(err, LoanRiskError::Api { status: 503, .. }));
    assert_eq!(err.user_message(), "Request failed: 503 Service Unavailable");
}
