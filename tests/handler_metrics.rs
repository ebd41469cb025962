mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use tinylink::routes::app_router;

#[tokio::test]
async fn test_metrics_text_exposition() {
    let ctx = common::create_test_context();
    ctx.urls.insert("abc12345", "https://example.com");
    let server = TestServer::new(app_router(ctx.state.clone())).unwrap();

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    server.get("/abc12345").await;
    server.get("/missing99").await;

    let response = server.get("/metrics").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));

    let body = response.text();
    assert!(body.contains("urls_shortened_total 1"));
    assert!(body.contains("successful_redirects_total 1"));
    assert!(body.contains("failed_lookups_total 1"));
    assert!(body.contains("request_latency_ms_bucket"));
    assert!(body.contains("request_latency_ms_count 3"));
}

#[tokio::test]
async fn test_metric_alias() {
    let ctx = common::create_test_context();
    let server = TestServer::new(app_router(ctx.state.clone())).unwrap();

    let response = server.get("/metric").await;

    response.assert_status_ok();
    assert!(response.text().contains("urls_shortened_total 0"));
}

#[tokio::test]
async fn test_metrics_json_summary() {
    let ctx = common::create_test_context();
    ctx.urls.insert("abc12345", "https://example.com");
    let server = TestServer::new(app_router(ctx.state.clone())).unwrap();

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org" }))
        .await;
    server.get("/abc12345").await;
    server.get("/abc12345").await;
    server.get("/nothere1").await;

    let response = server.get("/api/metrics").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["urlsShortened"], 1);
    assert_eq!(json["successfulRedirects"], 2);
    assert_eq!(json["failedLookups"], 1);
    assert_eq!(json["totalUrls"], 2);
    assert_eq!(json["totalClicks"], 2);
    assert!(json["averageLatency"].as_f64().unwrap() >= 0.0);
    assert!(json["p95Latency"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_metrics_json_store_failure() {
    let ctx = common::create_test_context();
    ctx.urls.set_failing(true);
    let server = TestServer::new(app_router(ctx.state.clone())).unwrap();

    server
        .get("/api/metrics")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    // Text exposition does not touch the store.
    server.get("/metrics").await.assert_status_ok();
}
