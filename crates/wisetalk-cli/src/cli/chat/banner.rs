//! Welcome banner display for chat sessions.

use std::io::Write;

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the webhook host (never the full URL), the active profile and how
/// many quotes this profile has already seen.
pub fn print_welcome_banner(
    out: &mut impl Write,
    host: &str,
    profile: &str,
    seen_count: usize,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  🧠 {}", style("WiseTalk").cyan().bold())?;
    writeln!(out, "  {}", style("A quote from the great minds, one at a time.").dim())?;
    writeln!(out)?;
    writeln!(out, "  {}  {}", style("Source:").bold(), style(host).dim())?;
    writeln!(out, "  {} {}", style("Profile:").bold(), style(profile).dim())?;
    writeln!(out, "  {}    {}", style("Seen:").bold(), style(seen_count).dim())?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Press Enter for a quote. Type /help for commands, Ctrl+D to exit").dim()
    )?;
    writeln!(out, "  {}", style("---").dim())?;
    writeln!(out)?;
    Ok(())
}
