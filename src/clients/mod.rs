pub mod http;

pub use self::http::HttpClient;

use async_trait::async_trait;
use crate::error::Result;
use crate::models::{OutboundRequest, UpstreamResponse};

/// Carries one request to the upstream and returns its raw answer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, outbound: OutboundRequest) -> Result<UpstreamResponse>;
}
