//! Seen-set store: the in-memory [`SeenSet`] mirrored into a [`KvStore`] slot.
//!
//! The in-memory set is the source of truth for the session. Storage
//! failures are logged and swallowed: a failed read starts from an empty
//! set, a failed write leaves the set unsaved.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use wisetalk_types::seen::SeenSet;

use crate::storage::kv_store::KvStore;

/// Key of the slot holding the JSON array of seen quote texts.
pub const SEEN_QUOTES_KEY: &str = "seen_quotes";

/// Persisted set of quote texts already shown under one scope.
pub struct SeenSetStore<K> {
    kv: K,
    scope: String,
    seen: SeenSet,
}

impl<K: KvStore> SeenSetStore<K> {
    /// Open the store for `scope` and load the persisted set once.
    pub async fn open(kv: K, scope: impl Into<String>) -> Self {
        let mut store = Self {
            kv,
            scope: scope.into(),
            seen: SeenSet::new(),
        };
        store.seen = store.load().await;
        store
    }

    /// Read the persisted slot. Missing or unreadable data yields an empty set.
    pub async fn load(&self) -> SeenSet {
        match self.kv.get(&self.scope, SEEN_QUOTES_KEY).await {
            Ok(Some(value)) => {
                if !value.is_array() {
                    warn!(scope = %self.scope, "Seen quotes slot is not an array, starting empty");
                }
                let seen = SeenSet::from_json_lenient(&value);
                debug!(scope = %self.scope, count = seen.len(), "Loaded seen quotes");
                seen
            }
            Ok(None) => SeenSet::new(),
            Err(e) => {
                warn!(scope = %self.scope, error = %e, "Failed to load seen quotes, starting empty");
                SeenSet::new()
            }
        }
    }

    /// Write the current set back as a JSON array of strings.
    pub async fn save(&self) {
        if let Err(e) = self
            .kv
            .set(&self.scope, SEEN_QUOTES_KEY, &self.seen.to_json())
            .await
        {
            warn!(scope = %self.scope, error = %e, "Failed to save seen quotes");
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    /// Record a text as seen and persist immediately.
    ///
    /// Returns `false` (and skips the write) if it was already present.
    pub async fn add(&mut self, text: &str) -> bool {
        if !self.seen.insert(text) {
            return false;
        }
        self.save().await;
        true
    }

    /// Empty the set and remove the persisted slot. Returns how many texts
    /// were dropped.
    pub async fn clear(&mut self) -> usize {
        let dropped = self.seen.len();
        self.seen.clear();
        if let Err(e) = self.kv.delete(&self.scope, SEEN_QUOTES_KEY).await {
            warn!(scope = %self.scope, error = %e, "Failed to remove seen quotes slot");
        }
        dropped
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.seen.iter()
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// When the slot was last written, if it exists.
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        match self.kv.get_entry(&self.scope, SEEN_QUOTES_KEY).await {
            Ok(entry) => entry.map(|e| e.updated_at),
            Err(e) => {
                warn!(scope = %self.scope, error = %e, "Failed to read seen quotes entry");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryKvStore;

    #[tokio::test]
    async fn test_open_empty_when_missing() {
        let store = SeenSetStore::open(MemoryKvStore::new(), "default").await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_then_contains_survives_reload() {
        let kv = MemoryKvStore::new();
        let mut store = SeenSetStore::open(kv.clone(), "default").await;
        assert!(store.add("Know thyself").await);
        assert!(store.contains("Know thyself"));

        let reloaded = SeenSetStore::open(kv, "default").await;
        assert!(reloaded.contains("Know thyself"));
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let kv = MemoryKvStore::new();
        let mut store = SeenSetStore::open(kv.clone(), "default").await;
        for text in ["A", "B", "C"] {
            store.add(text).await;
        }
        let loaded = store.load().await;
        assert_eq!(&loaded, store.seen());
        assert_eq!(kv.raw("default", SEEN_QUOTES_KEY), Some(serde_json::json!(["A", "B", "C"])));
    }

    #[tokio::test]
    async fn test_add_duplicate_is_noop() {
        let mut store = SeenSetStore::open(MemoryKvStore::new(), "default").await;
        assert!(store.add("A").await);
        assert!(!store.add("A").await);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_slot_loads_empty() {
        let kv = MemoryKvStore::new();
        kv.put_raw("default", SEEN_QUOTES_KEY, serde_json::json!({"not": "an array"}));
        let store = SeenSetStore::open(kv, "default").await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_slot_loads_empty() {
        let kv = MemoryKvStore::new();
        kv.put_raw("default", SEEN_QUOTES_KEY, serde_json::json!(["A"]));
        kv.fail_reads(true);
        let store = SeenSetStore::open(kv, "default").await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let kv = MemoryKvStore::new();
        kv.fail_writes(true);
        let mut store = SeenSetStore::open(kv.clone(), "default").await;
        assert!(store.add("A").await);
        assert!(store.contains("A"));
        assert!(kv.raw("default", SEEN_QUOTES_KEY).is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_slot() {
        let kv = MemoryKvStore::new();
        let mut store = SeenSetStore::open(kv.clone(), "default").await;
        store.add("A").await;
        store.add("B").await;
        assert_eq!(store.clear().await, 2);
        assert!(store.is_empty());
        assert!(kv.raw("default", SEEN_QUOTES_KEY).is_none());
        assert!(store.last_updated().await.is_none());
    }

    #[tokio::test]
    async fn test_scopes_are_isolated() {
        let kv = MemoryKvStore::new();
        let mut work = SeenSetStore::open(kv.clone(), "work").await;
        work.add("A").await;
        let home = SeenSetStore::open(kv, "home").await;
        assert!(!home.contains("A"));
        assert_eq!(work.scope(), "work");
    }

    #[tokio::test]
    async fn test_last_updated_after_add() {
        let mut store = SeenSetStore::open(MemoryKvStore::new(), "default").await;
        assert!(store.last_updated().await.is_none());
        store.add("A").await;
        assert!(store.last_updated().await.is_some());
    }
}
