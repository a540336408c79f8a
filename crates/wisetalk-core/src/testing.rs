//! Hand-written test doubles for the core ports.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::Notify;

use wisetalk_types::error::{QuoteError, StorageError};
use wisetalk_types::quote::Quote;
use wisetalk_types::storage::KvEntry;
use wisetalk_types::transcript::TranscriptEntry;

use crate::chat::view::ChatView;
use crate::quote::fetcher::QuoteFetcher;
use crate::storage::kv_store::KvStore;

pub fn quote(text: &str) -> Quote {
    Quote {
        quote: text.to_string(),
        author: "Anonymous".to_string(),
        explanation: String::new(),
        date: None,
    }
}

// --- In-memory KvStore ---

/// Cloning shares the backing map, so a clone behaves like the same
/// storage seen after a restart.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<(String, String), KvEntry>>>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, scope: &str, key: &str) -> Option<serde_json::Value> {
        self.entries
            .lock()
            .unwrap()
            .get(&(scope.to_string(), key.to_string()))
            .map(|e| e.value.clone())
    }

    pub fn put_raw(&self, scope: &str, key: &str, value: serde_json::Value) {
        let now = Utc::now();
        self.entries.lock().unwrap().insert(
            (scope.to_string(), key.to_string()),
            KvEntry {
                scope: scope.to_string(),
                key: key.to_string(),
                value,
                created_at: now,
                updated_at: now,
            },
        );
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Serialization("corrupt value".to_string()));
        }
        Ok(self.raw(scope, key))
    }

    async fn set(&self, scope: &str, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Query("quota exceeded".to_string()));
        }
        self.put_raw(scope, key, value.clone());
        Ok(())
    }

    async fn delete(&self, scope: &str, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .remove(&(scope.to_string(), key.to_string()));
        Ok(())
    }

    async fn get_entry(&self, scope: &str, key: &str) -> Result<Option<KvEntry>, StorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(scope.to_string(), key.to_string()))
            .cloned())
    }
}

// --- Scripted fetcher ---

/// Replays a fixed sequence of results and counts calls.
///
/// With a gate, each fetch waits for a `Notify` permit before answering.
#[derive(Default)]
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Quote, QuoteError>>>,
    calls: AtomicU32,
    gate: Option<Arc<Notify>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Result<Quote, QuoteError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
            gate: None,
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(quote(t))).collect())
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QuoteFetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<Quote, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(QuoteError::Network("script exhausted".to_string())))
    }
}

// --- Recording view ---

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Append(TranscriptEntry),
    Busy(bool),
    Date(String),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Append(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }
}

impl ChatView for RecordingView {
    fn append(&self, entry: &TranscriptEntry) {
        self.events.lock().unwrap().push(ViewEvent::Append(entry.clone()));
    }

    fn set_busy(&self, busy: bool) {
        self.events.lock().unwrap().push(ViewEvent::Busy(busy));
    }

    fn show_date(&self, date: &str) {
        self.events.lock().unwrap().push(ViewEvent::Date(date.to_string()));
    }
}
