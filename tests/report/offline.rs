use httpmock::{Method::POST, MockServer};
use serde_json::json;
use stockview::PredictError;

use crate::common::{client_for, read_fixture};

#[tokio::test]
async fn offline_submit_posts_symbol_and_parses_report() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .header("content-type", "application/json")
            .json_body(json!({ "stock": "TSLA" }));
        then.status(200)
            .header("content-type", "application/json")
            .body(read_fixture("report_TSLA.json"));
    });

    let client = client_for(&server);
    let report = client.submit("TSLA").await.unwrap();

    mock.assert();

    let info = report.info.as_ref().expect("info section");
    assert_eq!(info.long_name.as_deref(), Some("Tesla, Inc."));
    assert_eq!(report.future.as_ref().map(Vec::len), Some(3));
    assert_eq!(report.news.as_ref().map(Vec::len), Some(2));
    assert_eq!(report.officers().len(), 2);
}

#[tokio::test]
async fn offline_empty_symbol_is_still_sent() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(json!({ "stock": "" }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"info": {"longName": "Unknown"}}"#);
    });

    let client = client_for(&server);
    let report = client.submit("").await.unwrap();

    mock.assert();
    assert_eq!(
        report.info.and_then(|i| i.long_name).as_deref(),
        Some("Unknown")
    );
}

#[tokio::test]
async fn offline_symbol_is_not_trimmed() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(json!({ "stock": "  tsla " }));
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let report = client.submit("  tsla ").await.unwrap();

    mock.assert();
    assert!(report.info.is_none());
    assert!(report.future.is_none());
    assert!(report.news.is_none());
}

#[tokio::test]
async fn offline_non_200_is_a_status_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(500).body("oops");
    });

    let client = client_for(&server);
    let err = client.submit("FAIL").await.unwrap_err();
    mock.assert();

    match err {
        PredictError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/predict"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn offline_other_success_codes_are_not_accepted() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(204);
    });

    let client = client_for(&server);
    let err = client.submit("TSLA").await.unwrap_err();
    assert_eq!(err.status(), Some(204));
    assert!(!err.is_network());
}

#[tokio::test]
async fn offline_malformed_body_is_a_json_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).body("<html>not json</html>");
    });

    let client = client_for(&server);
    let err = client.submit("TSLA").await.unwrap_err();
    assert!(matches!(err, PredictError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn offline_unreachable_endpoint_is_a_network_error() {
    // Port 9 (discard) on localhost is not expected to accept connections.
    let client = stockview::PredictClient::builder()
        .endpoint(url::Url::parse("http://127.0.0.1:9/predict").unwrap())
        .build()
        .unwrap();

    let err = client.submit("TSLA").await.unwrap_err();
    assert!(err.is_network(), "got {err:?}");
    assert_eq!(err.status(), None);
}
