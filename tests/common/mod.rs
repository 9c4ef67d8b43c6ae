#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use vendor_relay::clients::{HttpClient, Transport};
use vendor_relay::config::{NotifierConfig, Settings};
use vendor_relay::services::{Notifier, SimulatedNotifier};
use vendor_relay::state::AppState;
use vendor_relay::build_router;

pub const SERVICE_KEY: &str = "service-key";
pub const ORIGIN: &str = "https://app.example.com";

pub fn create_test_settings(base_url: Option<String>) -> Settings {
    let mut settings = Settings::default();
    settings.upstream.base_url = base_url;
    settings.upstream.api_key = Some(SERVICE_KEY.to_string());
    settings.cors.allowed_origin = ORIGIN.to_string();
    settings.notifier = NotifierConfig {
        delay_ms: 1000,
        jitter_ms: 0,
    };
    settings
}

pub fn create_test_app(settings: &Settings) -> Router {
    let transport: Arc<dyn Transport> = Arc::new(HttpClient::new(None).unwrap());
    let notifier: Arc<dyn Notifier> = Arc::new(SimulatedNotifier::new(&settings.notifier));
    let state = AppState::with_parts(settings, transport, notifier);

    build_router(settings, state).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (Response::from_parts(parts, Body::empty()), json)
}

pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], ORIGIN);
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
}
