use std::sync::Arc;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method, StatusCode, Uri};
use tracing::error;
use crate::error::Error;
use crate::models::{ForwardedRequest, NotificationPayload, NotificationReceipt};
use crate::state::AppState;

fn header_string(headers: &HeaderMap, name: http::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Answers CORS preflight with an empty 200; the CORS headers come from the
/// router layers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn proxy_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return preflight_handler().await.into_response();
    }

    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request = ForwardedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type: header_string(&headers, CONTENT_TYPE),
        authorization: header_string(&headers, AUTHORIZATION),
        body: Some(body),
    };

    match state.relay.forward(request).await {
        Ok(forwarded) => (forwarded.status, Json(forwarded.body)).into_response(),
        Err(e) => {
            error!(
                error = %e,
                details = ?e,
                method = %method,
                path = %path,
                "Failed to proxy request"
            );
            e.into_response()
        }
    }
}

pub async fn notify_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NotificationPayload>,
) -> Result<Json<NotificationReceipt>, Error> {
    let receipt = state.notifier.send(&payload).await.map_err(|e| {
        error!(error = %e, email = %payload.email, "Notification failed");
        e
    })?;

    Ok(Json(receipt))
}
