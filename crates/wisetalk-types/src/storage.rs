//! Key-value storage types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored key-value pair with its timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvEntry {
    /// Scope the key lives in (the profile name for the seen set).
    pub scope: String,
    pub key: String,
    pub value: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
