//! Key-value store trait.
//!
//! Defines the interface for scoped key-value persistence.
//! Implementations live in wisetalk-infra.

use wisetalk_types::error::StorageError;
use wisetalk_types::storage::KvEntry;

/// Trait for scoped key-value persistent storage.
///
/// Stores arbitrary JSON values keyed by scope and string key.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        scope: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, StorageError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        scope: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Delete a key. No-op if key does not exist.
    fn delete(
        &self,
        scope: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Get the full entry including timestamps.
    fn get_entry(
        &self,
        scope: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<KvEntry>, StorageError>> + Send;
}
