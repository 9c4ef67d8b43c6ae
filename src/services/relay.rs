use std::sync::Arc;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use tracing::{debug, error};
use crate::clients::Transport;
use crate::config::{Settings, UpstreamConfig};
use crate::error::{Error, Result};
use crate::models::{ForwardedRequest, ForwardedResponse, OutboundRequest};

pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("apikey");

/// Forwards calls under the proxy prefix to the upstream API.
#[derive(Clone)]
pub struct RelayService {
    upstream: UpstreamConfig,
    prefix: String,
    transport: Arc<dyn Transport>,
}

impl RelayService {
    pub fn new(settings: &Settings, transport: Arc<dyn Transport>) -> Self {
        Self {
            upstream: settings.upstream.clone(),
            prefix: settings.proxy.prefix.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Base URL followed by the inbound path with the prefix removed from the
    /// front. Paths outside the prefix are appended as they are.
    pub fn target_url(&self, base_url: &str, path: &str) -> String {
        let suffix = path.strip_prefix(self.prefix.as_str()).unwrap_or(path);
        format!("{}{}", base_url, suffix)
    }

    pub fn outbound_request(&self, request: ForwardedRequest) -> Result<OutboundRequest> {
        let base_url = self
            .upstream
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingUpstream("upstream.base_url"))?;
        let api_key = self
            .upstream
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingUpstream("upstream.api_key"))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);

        let authorization = match request.authorization.as_deref() {
            Some(value) => HeaderValue::from_str(value)?,
            None => HeaderValue::from_str(&format!("Bearer {}", api_key))?,
        };
        headers.insert(AUTHORIZATION, authorization);

        let body = match request.method {
            Method::GET => None,
            _ => request.body.filter(|body| !body.is_empty()),
        };

        Ok(OutboundRequest {
            url: self.target_url(base_url, &request.path),
            method: request.method,
            headers,
            body,
        })
    }

    /// Sends the request once and relays the upstream status with its
    /// JSON-decoded body.
    pub async fn forward(&self, request: ForwardedRequest) -> Result<ForwardedResponse> {
        debug!(
            method = %request.method,
            path = %request.path,
            content_type = ?request.content_type,
            caller_authorization = request.authorization.is_some(),
            "Forwarding request"
        );

        let outbound = self.outbound_request(request)?;
        let upstream = self.transport.send(outbound).await?;

        let status = StatusCode::from_u16(upstream.status)
            .map_err(|_| Error::InvalidStatus(upstream.status))?;

        let body = serde_json::from_slice(&upstream.body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&upstream.body);
            error!(
                error = %e,
                status = upstream.status,
                body = %body_str,
                "Upstream returned a non-JSON body"
            );
            Error::from(e)
        })?;

        Ok(ForwardedResponse { status, body })
    }
}
