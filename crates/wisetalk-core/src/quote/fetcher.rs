//! QuoteFetcher trait definition.
//!
//! One call, one request. Retry policy lives in the resolver, never here.

use wisetalk_types::error::QuoteError;
use wisetalk_types::quote::Quote;

/// Source of quotes (the remote webhook in production).
///
/// Implementations must normalize the response shape and fail with
/// [`QuoteError::MalformedPayload`] when `quote` or `author` is absent.
pub trait QuoteFetcher: Send + Sync {
    /// Perform a single fetch.
    fn fetch(&self) -> impl std::future::Future<Output = Result<Quote, QuoteError>> + Send;
}
