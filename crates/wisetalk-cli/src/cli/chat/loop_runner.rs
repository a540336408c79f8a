//! Main chat loop orchestration.
//!
//! Reads lines from the async readline. While a trigger is in flight the
//! loop keeps reading input and forwards every submitted line to the
//! controller, which ignores it because it is busy. Ctrl+D during a pending
//! request ends the session once that request completes; in-flight
//! requests are never cancelled.

use std::io::Write;

use console::style;
use tracing::{debug, info};

use wisetalk_core::chat::controller::TriggerOutcome;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::TerminalView;

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let prompt = format!("  {} ", style("Quote >").green().bold());
    let busy_prompt = format!("  {} ", style("Loading...").dim());

    let (mut chat_input, mut writer) = ChatInput::new(prompt.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    let view = TerminalView::new(Box::new(writer.clone()), false);
    let controller = state.controller(view).await?;

    print_welcome_banner(
        &mut writer,
        &state.endpoint_host(),
        &state.config.profile,
        controller.seen_count().await,
    )?;

    let mut exit_requested = false;

    while !exit_requested {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                writeln!(writer, "\n  {}", style("Press Ctrl+D to exit, or Enter for another quote.").dim())?;
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(&mut writer)?,
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::Reset => {
                    let dropped = controller.reset_seen().await;
                    writeln!(
                        writer,
                        "\n  {} Forgot {} seen quote(s).\n",
                        style("✓").green().bold(),
                        dropped
                    )?;
                }
                ChatCommand::Seen => {
                    writeln!(
                        writer,
                        "\n  {} quote(s) seen under profile '{}', {} shown this session.\n",
                        style(controller.seen_count().await).cyan().bold(),
                        state.config.profile,
                        controller.quotes_shown().await
                    )?;
                }
                ChatCommand::Unknown(name) => {
                    writeln!(
                        writer,
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    )?;
                }
            }
            continue;
        }

        // Anything else is the trigger action.
        chat_input.update_prompt(&busy_prompt);
        let pending = controller.trigger();
        tokio::pin!(pending);

        // `pending` must be polled first: its first poll claims Busy, so a
        // line already buffered behind this one is seen as input-while-busy.
        let outcome = loop {
            tokio::select! {
                biased;
                outcome = &mut pending => break outcome,
                event = chat_input.read_line() => match event {
                    InputEvent::Message(_) => {
                        let ignored = controller.trigger().await;
                        debug!(?ignored, "Input while busy");
                    }
                    InputEvent::Eof => exit_requested = true,
                    InputEvent::Interrupted => {}
                },
            }
        };
        chat_input.update_prompt(&prompt);

        match outcome {
            TriggerOutcome::Shown(resolution) if resolution.duplicate => {
                writeln!(
                    writer,
                    "  {}",
                    style("(You have seen this one before; the source is running out of new quotes.)").dim()
                )?;
            }
            TriggerOutcome::Shown(_) | TriggerOutcome::Failed(_) | TriggerOutcome::Ignored => {}
        }
        writeln!(writer)?;
    }

    info!(shown = controller.quotes_shown().await, "Chat session ended");
    writeln!(writer, "\n  {}", style("Session ended.").dim())?;
    chat_input.flush();
    Ok(())
}
