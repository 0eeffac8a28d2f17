#![allow(dead_code)]

use axum_test::TestServer;
use qr_shortener::config::Config;
use qr_shortener::routes::build_router;
use qr_shortener::state::AppState;

pub const SHORT_URL_PATTERN: &str = r"^https://short\.url/[0-9a-z]{6}$";

pub fn create_test_state() -> AppState {
    AppState::from_config(&Config::default())
}

pub fn create_test_server() -> TestServer {
    let app = build_router(create_test_state(), concat!(env!("CARGO_MANIFEST_DIR"), "/static"));
    TestServer::new(app).unwrap()
}
