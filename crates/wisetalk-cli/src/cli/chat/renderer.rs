//! Transcript rendering for the terminal and for JSON-lines output.
//!
//! `TerminalView` writes styled bubbles to any `Write` sink: stdout for the
//! one-shot command, the readline `SharedWriter` inside the chat loop so
//! output does not clobber the prompt. `JsonLinesView` emits one JSON
//! object per transcript entry for scripting.

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use wisetalk_core::chat::view::ChatView;
use wisetalk_types::transcript::TranscriptEntry;

/// Format one transcript entry as styled terminal lines.
pub fn format_entry(entry: &TranscriptEntry) -> String {
    match entry {
        TranscriptEntry::UserPrompt { text } => {
            format!("\n  🧑 {} {}\n", style("You").green().bold(), text)
        }
        TranscriptEntry::BotQuote { quote } => {
            let mut out = format!(
                "\n  🧠 {}\n     {}\n",
                style(format!("\u{201c}{}\u{201d}", quote.quote)).cyan().bold(),
                style(format!("\u{2013} {}", quote.author)).bold(),
            );
            if !quote.explanation.is_empty() {
                for line in quote.explanation.lines() {
                    out.push_str(&format!("     {}\n", style(line).dim()));
                }
            }
            out
        }
        TranscriptEntry::BotError { message } => {
            let mut lines = message.lines();
            let mut out = format!(
                "\n  {} {}\n",
                style("!").red().bold(),
                lines.next().unwrap_or_default()
            );
            for line in lines {
                out.push_str(&format!("    {line}\n"));
            }
            out
        }
    }
}

/// Styled transcript sink with an optional spinner while busy.
pub struct TerminalView {
    out: Mutex<Box<dyn Write + Send>>,
    spinner_enabled: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalView {
    /// Render to `out`. With `spinner`, an indicatif spinner runs while
    /// busy; otherwise a single "fetching" line is written.
    pub fn new(out: Box<dyn Write + Send>, spinner: bool) -> Self {
        Self {
            out: Mutex::new(out),
            spinner_enabled: spinner,
            spinner: Mutex::new(None),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()), true)
    }

    fn write(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}

impl ChatView for TerminalView {
    fn append(&self, entry: &TranscriptEntry) {
        self.write(&format_entry(entry));
    }

    fn set_busy(&self, busy: bool) {
        if !self.spinner_enabled {
            if busy {
                self.write(&format!("  {}\n", style("fetching quote...").dim()));
            }
            return;
        }

        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if busy {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("fetching quote...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            *slot = Some(spinner);
        } else if let Some(spinner) = slot.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_date(&self, date: &str) {
        self.write(&format!("\n  {} {}\n", style("📅").dim(), style(date).yellow()));
    }
}

/// One JSON object per transcript entry on the given sink.
pub struct JsonLinesView {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesView {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl ChatView for JsonLinesView {
    fn append(&self, entry: &TranscriptEntry) {
        let Ok(line) = serde_json::to_string(entry) else {
            return;
        };
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }

    // The date travels inside the quote entry; busy state has no JSON form.
    fn set_busy(&self, _busy: bool) {}

    fn show_date(&self, _date: &str) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use wisetalk_types::quote::Quote;

    /// Clonable in-memory sink.
    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn text(&self) -> String {
            console::strip_ansi_codes(&String::from_utf8(self.0.lock().unwrap().clone()).unwrap())
                .to_string()
        }
    }

    fn sample_quote() -> Quote {
        Quote {
            quote: "Know thyself".to_string(),
            author: "Socrates".to_string(),
            explanation: "Inscribed at Delphi".to_string(),
            date: Some("2026-10-15".to_string()),
        }
    }

    #[test]
    fn test_format_user_prompt() {
        let text = console::strip_ansi_codes(&format_entry(&TranscriptEntry::user_prompt())).to_string();
        assert!(text.contains("You"));
        assert!(text.contains("Give me today's quote."));
    }

    #[test]
    fn test_format_quote() {
        let text = console::strip_ansi_codes(&format_entry(&TranscriptEntry::bot_quote(sample_quote())))
            .to_string();
        assert!(text.contains("\u{201c}Know thyself\u{201d}"));
        assert!(text.contains("\u{2013} Socrates"));
        assert!(text.contains("Inscribed at Delphi"));
    }

    #[test]
    fn test_format_error_multiline() {
        let text = console::strip_ansi_codes(&format_entry(&TranscriptEntry::bot_error("HTTP error! status: 500")))
            .to_string();
        assert!(text.contains("! Sorry"));
        assert!(text.contains("    HTTP error! status: 500"));
        assert!(text.contains("    Please try again."));
    }

    #[test]
    fn test_terminal_view_without_spinner() {
        let buffer = Buffer::default();
        let view = TerminalView::new(Box::new(buffer.clone()), false);

        view.set_busy(true);
        view.append(&TranscriptEntry::user_prompt());
        view.show_date("2026-10-15");
        view.set_busy(false);

        let text = buffer.text();
        assert!(text.contains("fetching quote..."));
        assert!(text.contains("Give me today's quote."));
        assert!(text.contains("2026-10-15"));
    }

    #[test]
    fn test_json_lines_view() {
        let buffer = Buffer::default();
        let view = JsonLinesView::new(Box::new(buffer.clone()));

        view.append(&TranscriptEntry::user_prompt());
        view.append(&TranscriptEntry::bot_quote(sample_quote()));

        let text = buffer.text();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "user_prompt");
        assert_eq!(lines[1]["kind"], "bot_quote");
        assert_eq!(lines[1]["quote"]["author"], "Socrates");
    }
}
