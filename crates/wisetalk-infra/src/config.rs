//! Global configuration loader for WiseTalk.
//!
//! Reads `config.toml` from the data directory (`~/.wisetalk/` in production)
//! and deserializes it into [`WiseTalkConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::Path;

use wisetalk_types::config::WiseTalkConfig;

use crate::filesystem::config_path;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`WiseTalkConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> WiseTalkConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return WiseTalkConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return WiseTalkConfig::default();
        }
    };

    match toml::from_str::<WiseTalkConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            WiseTalkConfig::default()
        }
    }
}

/// Command-line / environment overrides layered over the file config.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub profile: Option<String>,
    pub max_retries: Option<u32>,
}

/// Apply overrides. Blank strings are ignored.
pub fn apply_overrides(mut config: WiseTalkConfig, overrides: ConfigOverrides) -> WiseTalkConfig {
    if let Some(endpoint) = overrides.endpoint.filter(|e| !e.trim().is_empty()) {
        config.endpoint = endpoint;
    }
    if let Some(profile) = overrides.profile.filter(|p| !p.trim().is_empty()) {
        config.profile = profile;
    }
    if let Some(max_retries) = overrides.max_retries {
        config.max_retries = max_retries;
    }
    config
}
