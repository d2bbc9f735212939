use crate::domain::ports::RelayClient;
use crate::domain::relay::{DonationRequest, RelayReply, RelayResponse};
use crate::error::Result;
use async_trait::async_trait;
use tracing::instrument;

/// Submits donation requests over HTTP.
///
/// POSTs the JSON body to the configured relay endpoint and decodes the
/// reply body regardless of the response status; the application layer
/// decides what a non-2xx reply means. Connection and decode failures
/// surface as errors.
pub struct HttpRelayClient {
    endpoint_url: String,
    client: reqwest::Client,
}

impl HttpRelayClient {
    /// Creates a client for the given relay endpoint URL.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    #[instrument(skip_all, fields(nickname = %request.nickname, amount = request.amount))]
    async fn submit(&self, request: &DonationRequest) -> Result<RelayResponse> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await?;

        let status_ok = response.status().is_success();
        let body = response.text().await?;
        let reply: RelayReply = serde_json::from_str(&body)?;
        tracing::debug!(status_ok, success = reply.success, "relay replied");

        Ok(RelayResponse { status_ok, reply })
    }
}
