//! Terminal pipeline stage backed by reqwest

use async_trait::async_trait;
use reqwest::{Client, Request};

use super::{PipelineStage, Response};
use crate::error::{PipelineError, Result};

/// Terminal stage that executes requests with a shared `reqwest::Client`
/// and buffers the response body.
///
/// This is the innermost stage of a pipeline; everything else wraps it.
/// Retries, authentication, and long-running-operation polling belong to
/// other stages, not here.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing client, reusing its connection pool and settings.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineStage for ReqwestTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        // Streaming bodies cannot be replayed; refuse before any I/O.
        let request = request.try_clone().ok_or_else(|| {
            PipelineError::request("request body is streaming and cannot be cloned")
        })?;

        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}
