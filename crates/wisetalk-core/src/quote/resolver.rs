//! Unique quote resolution with a bounded dedup retry budget.
//!
//! Fetches until the webhook hands back a quote whose text is not in the
//! seen set, or until `max_retries` extra fetches have been spent. In the
//! latter case the last duplicate is returned anyway: uniqueness is
//! best-effort and never turns into an error.

use tracing::{debug, warn};

use wisetalk_types::config::RetryPolicy;
use wisetalk_types::error::QuoteError;
use wisetalk_types::quote::Quote;
use wisetalk_types::seen::SeenSet;

use super::fetcher::QuoteFetcher;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub quote: Quote,
    /// Number of fetches performed (1..=max_retries + 1).
    pub attempts: u32,
    /// True when the retry budget ran out and `quote` was already seen.
    pub duplicate: bool,
}

/// Resolves a quote not yet present in the seen set.
pub struct UniqueQuoteResolver<F> {
    fetcher: F,
    policy: RetryPolicy,
}

impl<F: QuoteFetcher> UniqueQuoteResolver<F> {
    pub fn new(fetcher: F, policy: RetryPolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch until a quote outside `seen` arrives or the budget is spent.
    ///
    /// Fetches are strictly sequential and every retry issues a new request.
    /// Fetch and validation errors abort immediately; they are not retried.
    pub async fn resolve(&self, seen: &SeenSet) -> Result<Resolution, QuoteError> {
        let max_retries = self.policy.max_retries;
        let mut last_duplicate = None;

        for retry_count in 0..=max_retries {
            let attempts = retry_count.saturating_add(1);
            let quote = self.fetcher.fetch().await?;
            quote.validate()?;

            if !seen.contains(quote.text()) {
                debug!(attempts, author = %quote.author, "Resolved unseen quote");
                return Ok(Resolution {
                    quote,
                    attempts,
                    duplicate: false,
                });
            }

            if retry_count < max_retries {
                debug!(attempt = attempts, "Duplicate quote, retrying");
                tokio::time::sleep(self.policy.retry_delay).await;
            }
            last_duplicate = Some(quote);
        }

        let attempts = self.policy.max_attempts();
        warn!(attempts, "Dedup retry budget exhausted, showing a repeated quote");
        // The range is never empty, so at least one fetch ran.
        last_duplicate
            .map(|quote| Resolution {
                quote,
                attempts,
                duplicate: true,
            })
            .ok_or_else(|| QuoteError::MalformedPayload("no quote fetched".to_string()))
    }
}
