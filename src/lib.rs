//! CORS-forwarding relay for the vendor marketplace front end.
//!
//! The browser cannot call the database API directly, so every call under
//! the proxy prefix (`/api/supabase-proxy` by default) is forwarded to the
//! configured upstream with the service key attached. The crate also carries
//! the typed shapes of the upstream tables and of the UI value objects, and a
//! notification endpoint whose delivery is simulated.
use std::sync::Arc;

use axum::{
    Router,
    routing::{any, post},
};
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderValue,
};
use tokio::{net::TcpListener, signal};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::routes::{notify_handler, preflight_handler, proxy_handler};
use crate::state::AppState;

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
pub const NOTIFY_PATH: &str = "/api/notify";

/// Routes the proxy prefix and the notification endpoint. Every response,
/// errors included, carries the three CORS headers.
pub fn build_router(settings: &Settings, state: Arc<AppState>) -> Result<Router> {
    let origin = HeaderValue::from_str(&settings.cors.allowed_origin)?;

    let prefix = state.relay.prefix().to_string();
    validate_prefix(&prefix)?;

    let mut router = Router::new()
        .route(&format!("{prefix}/"), any(proxy_handler))
        .route(&format!("{prefix}/{{*path}}"), any(proxy_handler));
    if !prefix.is_empty() {
        router = router.route(&prefix, any(proxy_handler));
    }

    let router = router
        .route(NOTIFY_PATH, post(notify_handler).options(preflight_handler))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .with_state(state);

    Ok(router)
}

/// Rejects prefixes the router cannot register: they must be empty or start
/// with `/`, carry no route syntax, and not shadow the notification path.
fn validate_prefix(prefix: &str) -> Result<()> {
    let valid = (prefix.is_empty() || prefix.starts_with('/'))
        && !prefix.contains(['{', '}', '*'])
        && !prefix.contains("//")
        && prefix != NOTIFY_PATH;

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidPrefix(prefix.to_string()))
    }
}

pub async fn start_server(settings: Settings) -> Result<()> {
    info!("Initializing state...");
    let state = AppState::new(&settings)?;
    let app = build_router(&settings, state)?;

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!(
        prefix = %settings.proxy.prefix,
        upstream = ?settings.upstream.base_url,
        "Relay running on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
