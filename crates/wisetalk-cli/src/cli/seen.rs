//! Seen-quote history subcommands: list, count, clear.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use crate::state::AppState;

/// Longest quote preview shown in the table, in characters.
const PREVIEW_CHARS: usize = 80;

#[derive(Subcommand)]
pub enum SeenCommand {
    /// List every quote seen under the active profile.
    #[command(alias = "ls")]
    List,

    /// Print how many quotes have been seen.
    Count,

    /// Forget the seen history so quotes may repeat again.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

/// Handle a seen subcommand.
pub async fn handle_seen_command(cmd: SeenCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        SeenCommand::List => seen_list(state, json).await,
        SeenCommand::Count => seen_count(state, json).await,
        SeenCommand::Clear { force } => seen_clear(state, force, json).await,
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

async fn seen_list(state: &AppState, json: bool) -> Result<()> {
    let store = state.seen_store().await;
    let profile = &state.config.profile;

    if json {
        let result = serde_json::json!({
            "profile": profile,
            "count": store.len(),
            "quotes": store.seen(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if store.is_empty() {
        println!();
        println!(
            "  {} No quotes seen yet under profile '{}'.",
            style("i").blue().bold(),
            style(profile).cyan(),
        );
        println!("     Get one with: wisetalk quote");
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  Seen quotes for '{}' ({} entries)",
        style(profile).cyan(),
        store.len(),
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Quote").fg(Color::White),
    ]);

    for (i, text) in store.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1).fg(Color::DarkGrey), Cell::new(preview(text))]);
    }

    println!("{table}");
    println!();
    Ok(())
}

async fn seen_count(state: &AppState, json: bool) -> Result<()> {
    let store = state.seen_store().await;

    if json {
        println!(
            "{}",
            serde_json::json!({"profile": state.config.profile, "count": store.len()})
        );
    } else {
        println!("{}", store.len());
    }
    Ok(())
}

async fn seen_clear(state: &AppState, force: bool, json: bool) -> Result<()> {
    let mut store = state.seen_store().await;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Forget {} seen quote(s) for profile '{}'?",
                store.len(),
                style(&state.config.profile).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let dropped = store.clear().await;

    if json {
        println!(
            "{}",
            serde_json::json!({"cleared": dropped, "profile": state.config.profile})
        );
    } else {
        println!(
            "  {} Forgot {} seen quote(s) for '{}'.",
            style("✓").green().bold(),
            dropped,
            state.config.profile
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(preview("Know thyself"), "Know thyself");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "知".repeat(100);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
    }
}
