//! Global configuration types for WiseTalk.
//!
//! `WiseTalkConfig` represents the top-level `config.toml` that controls the
//! webhook endpoint, the dedup retry budget, and UX pacing delays.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Webhook that serves the quote of the day.
pub const DEFAULT_ENDPOINT: &str =
    "https://n8n.ichi-dify.com/webhook/394837e1-cffc-436e-b568-79404f497be6";

/// Top-level configuration for the WiseTalk client.
///
/// Loaded from `~/.wisetalk/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiseTalkConfig {
    /// Webhook URL. Treated as a secret by the HTTP client.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Additional fetches allowed when the webhook returns an already-seen quote.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Pause between duplicate retries.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Pause after the user bubble, before the fetch starts.
    #[serde(default = "default_prompt_delay_ms")]
    pub prompt_delay_ms: u64,

    /// Pause after the busy indicator clears, before the quote bubble.
    #[serde(default = "default_render_delay_ms")]
    pub render_delay_ms: u64,

    /// Request timeout. Unset means the HTTP client's default (none).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Storage scope for the seen-quote history.
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_prompt_delay_ms() -> u64 {
    300
}

fn default_render_delay_ms() -> u64 {
    200
}

fn default_profile() -> String {
    "default".to_string()
}

impl Default for WiseTalkConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            prompt_delay_ms: default_prompt_delay_ms(),
            render_delay_ms: default_render_delay_ms(),
            request_timeout_secs: None,
            profile: default_profile(),
        }
    }
}

impl WiseTalkConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            prompt_delay: Duration::from_millis(self.prompt_delay_ms),
            render_delay: Duration::from_millis(self.render_delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Dedup retry budget used by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl RetryPolicy {
    /// Upper bound on fetches per resolution.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// No delay between retries. Handy for tests and scripting.
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            retry_delay: Duration::ZERO,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        WiseTalkConfig::default().retry_policy()
    }
}

/// UX pacing delays around a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    pub prompt_delay: Duration,
    pub render_delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = WiseTalkConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay_ms, 500);
        assert_eq!(config.prompt_delay_ms, 300);
        assert_eq!(config.render_delay_ms, 200);
        assert!(config.request_timeout_secs.is_none());
        assert_eq!(config.profile, "default");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: WiseTalkConfig = toml::from_str("").unwrap();
        assert_eq!(config, WiseTalkConfig::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let toml_str = r#"
endpoint = "http://localhost:5678/webhook/quote"
max_retries = 2
request_timeout_secs = 10
"#;
        let config: WiseTalkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint, "http://localhost:5678/webhook/quote");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.retry_delay_ms, 500);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_retry_policy() {
        let policy = WiseTalkConfig::default().retry_policy();
        assert_eq!(policy.max_attempts(), 6);
        assert_eq!(policy.retry_delay, Duration::from_millis(500));
        assert_eq!(RetryPolicy::immediate(3).retry_delay, Duration::ZERO);
    }

    #[test]
    fn test_max_attempts_saturates() {
        let config: WiseTalkConfig = toml::from_str("max_retries = 4294967295").unwrap();
        assert_eq!(config.retry_policy().max_attempts(), u32::MAX);
    }

    #[test]
    fn test_pacing() {
        let pacing = WiseTalkConfig::default().pacing();
        assert_eq!(pacing.prompt_delay, Duration::from_millis(300));
        assert_eq!(pacing.render_delay, Duration::from_millis(200));
    }
}
