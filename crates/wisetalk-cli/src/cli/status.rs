//! Status dashboard command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Display configuration and seen-history status.
///
/// The endpoint is shown by host only; the full URL carries the webhook token.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let store = state.seen_store().await;
    let last_updated = store.last_updated().await;
    let host = state.endpoint_host();
    let config = &state.config;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "profile": config.profile,
            "endpoint_host": host,
            "max_retries": config.max_retries,
            "retry_delay_ms": config.retry_delay_ms,
            "request_timeout_secs": config.request_timeout_secs,
            "seen": store.len(),
            "seen_updated_at": last_updated.map(|t| t.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} WiseTalk v{}",
        style("🧠").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {}     {}", style("Data:").bold(), style(state.data_dir.display()).dim());
    println!("  {}  {}", style("Profile:").bold(), style(&config.profile).cyan());
    println!("  {}   {}", style("Source:").bold(), style(&host).dim());
    println!(
        "  {}  {} extra fetch(es), {} ms apart",
        style("Retries:").bold(),
        config.max_retries,
        config.retry_delay_ms
    );
    match config.request_timeout_secs {
        Some(secs) => println!("  {}  {secs}s", style("Timeout:").bold()),
        None => println!("  {}  {}", style("Timeout:").bold(), style("platform default").dim()),
    }
    println!();
    println!("  {}     {} quote(s)", style("Seen:").bold(), store.len());
    if let Some(updated) = last_updated {
        println!(
            "  {}  {}",
            style("Updated:").bold(),
            style(updated.format("%Y-%m-%d %H:%M UTC")).dim()
        );
    }
    println!();
    Ok(())
}
