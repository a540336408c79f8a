//! Interaction controller: one trigger action through the quote pipeline.
//!
//! Two states, Idle and Busy. A trigger while Busy is ignored outright (no
//! queueing). Within Busy the controller renders the user prompt, resolves
//! a unique quote, then renders either the quote or an error. Busy is
//! released on every path, including when the trigger future is dropped.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use wisetalk_types::config::Pacing;
use wisetalk_types::error::QuoteError;
use wisetalk_types::transcript::TranscriptEntry;

use super::session::ChatSession;
use super::view::ChatView;
use crate::quote::fetcher::QuoteFetcher;
use crate::quote::resolver::{Resolution, UniqueQuoteResolver};
use crate::storage::kv_store::KvStore;

/// What a single trigger did.
#[derive(Debug)]
pub enum TriggerOutcome {
    /// A quote was rendered and recorded as seen.
    Shown(Resolution),
    /// An error bubble was rendered; the seen set is untouched.
    Failed(QuoteError),
    /// The controller was busy; nothing happened.
    Ignored,
}

/// Clears the busy flag on drop.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct InteractionController<F, K, V> {
    resolver: UniqueQuoteResolver<F>,
    session: Mutex<ChatSession<K>>,
    view: V,
    pacing: Pacing,
    busy: AtomicBool,
}

impl<F, K, V> InteractionController<F, K, V>
where
    F: QuoteFetcher,
    K: KvStore,
    V: ChatView,
{
    pub fn new(resolver: UniqueQuoteResolver<F>, session: ChatSession<K>, view: V, pacing: Pacing) -> Self {
        Self {
            resolver,
            session: Mutex::new(session),
            view,
            pacing,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle one trigger action (button press / Enter).
    pub async fn trigger(&self) -> TriggerOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            debug!("Trigger ignored while busy");
            return TriggerOutcome::Ignored;
        };

        self.view.set_busy(true);
        self.view.append(&TranscriptEntry::user_prompt());
        tokio::time::sleep(self.pacing.prompt_delay).await;

        let mut session = self.session.lock().await;
        match self.resolver.resolve(session.seen().seen()).await {
            Ok(resolution) => {
                if let Some(date) = &resolution.quote.date {
                    self.view.show_date(date);
                }
                self.view.set_busy(false);
                tokio::time::sleep(self.pacing.render_delay).await;

                self.view.append(&TranscriptEntry::bot_quote(resolution.quote.clone()));
                session.record_shown(&resolution.quote).await;
                info!(
                    attempts = resolution.attempts,
                    duplicate = resolution.duplicate,
                    shown = session.quotes_shown(),
                    "Quote shown"
                );
                TriggerOutcome::Shown(resolution)
            }
            Err(e) => {
                self.view.set_busy(false);
                warn!(error = %e, status = ?e.status(), "Failed to get quote");
                self.view.append(&TranscriptEntry::bot_error(&e.to_string()));
                TriggerOutcome::Failed(e)
            }
        }
    }

    /// Forget every seen quote. Returns how many were dropped.
    pub async fn reset_seen(&self) -> usize {
        let dropped = self.session.lock().await.seen_mut().clear().await;
        info!(dropped, "Seen quotes cleared");
        dropped
    }

    pub async fn seen_count(&self) -> usize {
        self.session.lock().await.seen().len()
    }

    pub async fn quotes_shown(&self) -> u32 {
        self.session.lock().await.quotes_shown()
    }
}
