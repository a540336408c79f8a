//! Per-run chat session context.
//!
//! Holds everything the controller mutates across triggers: the seen-set
//! store, the number of quotes shown, and the last date label.

use wisetalk_types::quote::Quote;

use crate::seen::store::SeenSetStore;
use crate::storage::kv_store::KvStore;

pub struct ChatSession<K> {
    seen: SeenSetStore<K>,
    quotes_shown: u32,
    last_date: Option<String>,
}

impl<K: KvStore> ChatSession<K> {
    pub fn new(seen: SeenSetStore<K>) -> Self {
        Self {
            seen,
            quotes_shown: 0,
            last_date: None,
        }
    }

    pub fn seen(&self) -> &SeenSetStore<K> {
        &self.seen
    }

    pub fn seen_mut(&mut self) -> &mut SeenSetStore<K> {
        &mut self.seen
    }

    /// Quotes displayed since this session started.
    pub fn quotes_shown(&self) -> u32 {
        self.quotes_shown
    }

    pub fn last_date(&self) -> Option<&str> {
        self.last_date.as_deref()
    }

    /// Record a displayed quote: remember its text and bump the counter.
    pub async fn record_shown(&mut self, quote: &Quote) {
        self.seen.add(quote.text()).await;
        self.quotes_shown += 1;
        if let Some(date) = &quote.date {
            self.last_date = Some(date.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryKvStore, quote};

    #[tokio::test]
    async fn test_record_shown() {
        let store = SeenSetStore::open(MemoryKvStore::new(), "default").await;
        let mut session = ChatSession::new(store);

        let mut dated = quote("A");
        dated.date = Some("2026-10-15".to_string());
        session.record_shown(&dated).await;
        session.record_shown(&quote("B")).await;

        assert_eq!(session.quotes_shown(), 2);
        assert!(session.seen().contains("A"));
        assert!(session.seen().contains("B"));
        assert_eq!(session.last_date(), Some("2026-10-15"));
    }
}
