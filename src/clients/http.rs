use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use crate::clients::Transport;
use crate::error::Result;
use crate::models::{OutboundRequest, UpstreamResponse};

/// Sends relay requests over a pooled `reqwest` client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = timeout {
            debug!(timeout_secs = timeout.as_secs(), "Creating client with timeout");
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, outbound: OutboundRequest) -> Result<UpstreamResponse> {
        let mut request = self.client.request(outbound.method.clone(), &outbound.url);

        for (key, value) in outbound.headers.iter() {
            request = request.header(key, value);
        }

        if let Some(body) = outbound.body {
            request = request.body(body);
        }

        debug!(
            method = %outbound.method,
            url = %outbound.url,
            headers = ?outbound.headers.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            "Sending request"
        );

        let response = request.send().await?;
        let status = response.status().as_u16();

        debug!(
            status = status,
            url = %response.url(),
            "Response received"
        );

        let body = response.bytes().await?;

        Ok(UpstreamResponse { status, body })
    }
}
