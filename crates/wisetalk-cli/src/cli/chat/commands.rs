//! Slash command parsing for the chat loop.
//!
//! Anything that is not a slash command (including an empty line) asks for
//! a quote.

use std::io::Write;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Forget every quote seen under this profile.
    Reset,
    /// Show how many quotes have been seen.
    Seen,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/reset" => Some(ChatCommand::Reset),
        "/seen" => Some(ChatCommand::Seen),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}   {}", style("Enter").cyan(), "Get today's quote")?;
    writeln!(out, "  {}   {}", style("/help").cyan(), "Show this help message")?;
    writeln!(out, "  {}  {}", style("/reset").cyan(), "Forget all seen quotes")?;
    writeln!(out, "  {}   {}", style("/seen").cyan(), "Show how many quotes you have seen")?;
    writeln!(out, "  {}  {}", style("/clear").cyan(), "Clear the screen")?;
    writeln!(out, "  {}   {}", style("/exit").cyan(), "End the chat session")?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Input is ignored while a quote is loading").dim()
    )?;
    writeln!(out)?;
    Ok(())
}
