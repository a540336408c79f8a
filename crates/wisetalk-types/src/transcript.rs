//! Transcript entries appended by the chat view.

use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Static text of the user's request bubble.
pub const USER_PROMPT: &str = "Give me today's quote.";

/// Fallback when an error carries no message.
const DEFAULT_ERROR_DETAIL: &str = "communication error";

/// One bubble in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntry {
    UserPrompt { text: String },
    BotQuote { quote: Quote },
    BotError { message: String },
}

impl TranscriptEntry {
    pub fn user_prompt() -> Self {
        Self::UserPrompt {
            text: USER_PROMPT.to_string(),
        }
    }

    pub fn bot_quote(quote: Quote) -> Self {
        Self::BotQuote { quote }
    }

    /// Build the user-visible error bubble: apology, detail, retry hint.
    pub fn bot_error(detail: &str) -> Self {
        let detail = if detail.trim().is_empty() {
            DEFAULT_ERROR_DETAIL
        } else {
            detail
        };
        Self::BotError {
            message: format!("Sorry, something went wrong.\n{detail}\nPlease try again."),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Self::UserPrompt { .. })
    }
}
