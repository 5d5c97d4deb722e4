//! Test utilities for integration tests
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::Request;
use tower::util::ServiceExt;

use slotfinder::api::AppState;
use slotfinder::api::app;
use slotfinder::core::AppConfig;

pub const TEST_TOKEN: &str = "test_token";

/// Creates a test application router that talks to a mocked Calendly
/// API at `calendly_api_url`.
pub fn test_app(calendly_api_url: &str) -> Router {
    test_app_with(calendly_api_url, |_| {})
}

/// Same as `test_app` but lets the caller tweak the config first.
pub fn test_app_with(calendly_api_url: &str, configure: impl FnOnce(&mut AppConfig)) -> Router {
    let mut app_config = AppConfig::new(TEST_TOKEN);
    app_config.calendly_api_url = calendly_api_url.to_string();
    configure(&mut app_config);

    let app_state = AppState::new(app_config).expect("Failed to build app state");
    app(Arc::new(app_state))
}

/// Sends `GET /get-dates` and returns the status, content type and body.
pub async fn get_dates(app: Router) -> (http::StatusCode, String, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-dates")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    (status, content_type, body)
}
