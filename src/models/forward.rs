use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

/// The parts of an inbound call the relay cares about.
#[derive(Debug, Clone)]
pub struct ForwardedRequest {
    pub method: Method,
    /// Path plus query string, exactly as received.
    pub path: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Bytes>,
}

/// What the relay hands to the transport.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForwardedResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}
