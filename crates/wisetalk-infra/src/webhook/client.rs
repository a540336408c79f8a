//! WebhookQuoteFetcher -- concrete [`QuoteFetcher`] for the quote webhook.
//!
//! Issues a single GET per fetch and normalizes the body (object or
//! one-element array) into a validated [`Quote`].
//!
//! The webhook URL embeds its access token, so it is wrapped in
//! [`secrecy::SecretString`] and never logged. Only the host appears in
//! tracing output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use wisetalk_core::quote::fetcher::QuoteFetcher;
use wisetalk_types::error::QuoteError;
use wisetalk_types::quote::{Quote, QuotePayload};

/// Quote source backed by an HTTP webhook.
pub struct WebhookQuoteFetcher {
    client: reqwest::Client,
    endpoint: SecretString,
    host: String,
}

impl WebhookQuoteFetcher {
    /// Create a fetcher for `endpoint`.
    ///
    /// No request timeout is set unless `timeout` is given; the platform
    /// defaults apply.
    pub fn new(endpoint: SecretString, timeout: Option<Duration>) -> Result<Self, QuoteError> {
        let url = reqwest::Url::parse(endpoint.expose_secret())
            .map_err(|e| QuoteError::Network(format!("invalid webhook URL: {e}")))?;
        let host = url.host_str().unwrap_or("<unknown>").to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| QuoteError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            host,
        })
    }

    /// Host part of the endpoint, safe to display.
    pub fn host(&self) -> &str {
        &self.host
    }
}

// WebhookQuoteFetcher intentionally does NOT derive Debug: the endpoint
// carries the webhook token.

impl QuoteFetcher for WebhookQuoteFetcher {
    async fn fetch(&self) -> Result<Quote, QuoteError> {
        debug!(host = %self.host, "Fetching quote");

        let response = self
            .client
            .get(self.endpoint.expose_secret())
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| QuoteError::Network(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(
                host = %self.host,
                status = status.as_u16(),
                body = %body,
                "Webhook returned an error status"
            );
            return Err(QuoteError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Network(format!("failed to read body: {}", e.without_url())))?;

        QuotePayload::from_slice(&body)?.into_quote()
    }
}
