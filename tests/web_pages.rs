mod common;

use regex::Regex;

#[tokio::test]
async fn test_index_page_renders_empty_form() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<form"));
    assert!(body.contains(r#"name="url""#));
    assert!(!body.contains("Please enter a valid URL"));
    assert!(!body.contains("<svg"));
}

#[tokio::test]
async fn test_submit_valid_url_shows_link_and_qr_codes() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_ok();

    let body = response.text();
    let short_url = Regex::new(r"https://short\.url/[0-9a-z]{6}").unwrap();
    assert!(short_url.is_match(&body));
    assert!(body.contains("https://example.com"));
    assert!(body.contains("<svg"));
    assert!(body.contains("data-copy"));
    assert!(!body.contains("Please enter a valid URL"));
}

#[tokio::test]
async fn test_submit_invalid_url_shows_error() {
    let server = common::create_test_server();

    let response = server.post("/").form(&[("url", "not a url")]).await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Please enter a valid URL"));
    assert!(!body.contains("https://short.url/"));
    assert!(body.contains(r#"value="not a url""#));
}

#[tokio::test]
async fn test_submit_empty_form_shows_error() {
    let server = common::create_test_server();

    let response = server.post("/").form(&[("url", "")]).await;

    response.assert_status_ok();
    assert!(response.text().contains("Please enter a valid URL"));
}

#[tokio::test]
async fn test_demo_page_shows_all_variants() {
    let server = common::create_test_server();

    let response = server.get("/demo").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("QR Code Samples"));
    assert!(body.contains("Basic QR Code"));
    assert!(body.contains("Styled QR Code"));
    assert!(body.contains("High Error Correction QR Code"));
    assert!(body.contains("https://example.com"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let server = common::create_test_server();

    let response = server.get("/static/app.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("clipboard"));
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let server = common::create_test_server();

    let response = server.get("/nope").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/nope");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use qr_shortener::routes::app_router;
    use tower::ServiceExt;

    let app = app_router(
        common::create_test_state(),
        concat!(env!("CARGO_MANIFEST_DIR"), "/static"),
    );

    let response = app
        .oneshot(Request::builder().uri("/demo/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
