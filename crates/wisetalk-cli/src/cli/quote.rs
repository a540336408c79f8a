//! One-shot quote command: a single trigger through the full pipeline.

use anyhow::Result;

use wisetalk_core::chat::controller::TriggerOutcome;
use wisetalk_core::chat::view::ChatView;

use crate::state::AppState;

use super::chat::renderer::{JsonLinesView, TerminalView};

/// Fetch one unseen quote, render it, record it as seen.
///
/// Exits with an error (after rendering the error bubble) if the webhook
/// call fails.
pub async fn quote(state: &AppState, json: bool) -> Result<()> {
    if json {
        run_once(state, JsonLinesView::stdout()).await
    } else {
        run_once(state, TerminalView::stdout()).await?;
        println!();
        Ok(())
    }
}

async fn run_once<V: ChatView>(state: &AppState, view: V) -> Result<()> {
    let controller = state.controller(view).await?;
    match controller.trigger().await {
        TriggerOutcome::Shown(_) | TriggerOutcome::Ignored => Ok(()),
        TriggerOutcome::Failed(e) => Err(anyhow::Error::new(e).context("Failed to get a quote")),
    }
}
