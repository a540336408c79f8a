//! ChatView trait: the sinks the controller renders into.
//!
//! Implementations own their output surface (terminal, JSON lines, ...)
//! and hold no pipeline state.

use wisetalk_types::transcript::TranscriptEntry;

pub trait ChatView: Send + Sync {
    /// Append one bubble to the transcript.
    fn append(&self, entry: &TranscriptEntry);

    /// Toggle the busy indicator.
    fn set_busy(&self, busy: bool);

    /// Show the quote's date label.
    fn show_date(&self, date: &str);
}
