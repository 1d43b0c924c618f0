//! HTTP infrastructure: the `reqwest` implementation of `GenerationTransport`.
//!
//! One `POST {base_url}/calculate` per call, JSON in both directions.  The
//! response status is returned as-is; deciding what a 4xx/5xx means is the
//! use case's job.  A body that is not JSON is a transport failure, because
//! the exchange produced nothing the client can interpret.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use texgen_core::{CalculateResponse, GenerationRequest, CALCULATE_PATH};

use crate::application::generate_texture::{
    GenerationTransport, TransportError, TransportResponse,
};

/// Talks to the texture-generation server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGenerationTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationTransport {
    /// Creates a transport for the server at `base_url`.
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialise).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client, endpoint: calculate_endpoint(base_url) })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `base_url` with the `/calculate` path appended, without a double slash.
pub fn calculate_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CALCULATE_PATH)
}

#[async_trait]
impl GenerationTransport for HttpGenerationTransport {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn calculate(
        &self,
        request: &GenerationRequest,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| TransportError::Request(e.to_string()))?;
        debug!(status, bytes = text.len(), "response received");

        let body: CalculateResponse =
            serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}
