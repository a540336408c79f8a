//! Quote domain type and webhook payload normalization.
//!
//! The webhook answers either with a single object or with a one-element
//! array wrapping that object. [`QuotePayload`] accepts both shapes and
//! [`QuotePayload::into_quote`] collapses them into a validated [`Quote`].

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// A quote of the day.
///
/// Identity for deduplication is the exact `quote` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Quote {
    /// Check the fields a quote must carry to be displayed.
    ///
    /// Empty strings count as missing.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.quote.is_empty() {
            return Err(QuoteError::MalformedPayload("missing `quote`".to_string()));
        }
        if self.author.is_empty() {
            return Err(QuoteError::MalformedPayload("missing `author`".to_string()));
        }
        Ok(())
    }

    /// The text used as the deduplication key.
    pub fn text(&self) -> &str {
        &self.quote
    }
}

/// Raw quote object as sent by the webhook. Every field is optional so that
/// missing fields become a validation error instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "bio")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl TryFrom<RawQuote> for Quote {
    type Error = QuoteError;

    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        let quote = Quote {
            quote: raw.quote.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            explanation: raw.explanation.unwrap_or_default(),
            date: raw.date.filter(|d| !d.is_empty()),
        };
        quote.validate()?;
        Ok(quote)
    }
}

/// Either shape the webhook may return.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuotePayload {
    Many(Vec<RawQuote>),
    Single(RawQuote),
}

impl QuotePayload {
    /// Parse a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, QuoteError> {
        serde_json::from_slice(body)
            .map_err(|e| QuoteError::MalformedPayload(format!("failed to parse body: {e}")))
    }

    /// Normalize to a single validated quote. A sequence yields its first
    /// element; an empty sequence is malformed.
    pub fn into_quote(self) -> Result<Quote, QuoteError> {
        let raw = match self {
            Self::Single(raw) => raw,
            Self::Many(items) => items
                .into_iter()
                .next()
                .ok_or_else(|| QuoteError::MalformedPayload("empty array".to_string()))?,
        };
        Quote::try_from(raw)
    }
}
