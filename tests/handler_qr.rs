mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use qr_shortener::api::handlers::qr_handler;

fn make_server() -> TestServer {
    let app = Router::new()
        .route("/api/qr", get(qr_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_qr_default_options() {
    let server = make_server();

    let response = server
        .get("/api/qr")
        .add_query_param("value", "https://example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");

    let body = response.text();
    assert!(body.starts_with("<svg"));
    assert!(body.contains(r#"height="128""#));
    assert!(body.contains("#000000"));
    assert!(body.contains("#FFFFFF"));
}

#[tokio::test]
async fn test_qr_custom_options() {
    let server = make_server();

    let response = server
        .get("/api/qr")
        .add_query_param("value", "https://short.url/abc123")
        .add_query_param("size", "256")
        .add_query_param("level", "h")
        .add_query_param("fg", "#4F46E5")
        .add_query_param("bg", "#F8FAFC")
        .add_query_param("margin", "true")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains(r#"width="256""#));
    assert!(body.contains("#4F46E5"));
    assert!(body.contains("#F8FAFC"));
}

#[tokio::test]
async fn test_qr_size_out_of_range() {
    let server = make_server();

    let response = server
        .get("/api/qr")
        .add_query_param("value", "hello")
        .add_query_param("size", "10")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_qr_unknown_level() {
    let server = make_server();

    let response = server
        .get("/api/qr")
        .add_query_param("value", "hello")
        .add_query_param("level", "X")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Unable to render QR code");
}

#[tokio::test]
async fn test_qr_bad_color() {
    let server = make_server();

    let response = server
        .get("/api/qr")
        .add_query_param("value", "hello")
        .add_query_param("fg", "red")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_qr_empty_value() {
    let server = make_server();

    let response = server.get("/api/qr").add_query_param("value", "").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_qr_payload_too_large_for_level() {
    let server = make_server();

    let response = server
        .get("/api/qr")
        .add_query_param("value", "x".repeat(2000))
        .add_query_param("level", "H")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Unable to render QR code");
}
