#![forbid(unsafe_code)]

//! Incoming message records and their display formatting.

/// Non-breaking space, used both as buffer filler and as the substitute
/// for literal spaces inside message text. Rendering layers may collapse
/// runs of ordinary spaces; this glyph survives as one visible cell.
pub const NBSP: char = '\u{00A0}';

/// A message delivered by the host.
///
/// The `id` is the deduplication key: re-delivering a message whose id the
/// engine has already seen is a silent no-op, so hosts may hand over their
/// full message list on every update without bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Stable identifier, unique per message.
    pub id: u64,
    /// Raw body; truncated to the configured maximum on ingest.
    pub content: String,
    /// Author name, rendered after the quoted body.
    pub attribution: String,
}

impl Message {
    /// Creates a message record.
    pub fn new(id: u64, content: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            attribution: attribution.into(),
        }
    }

    /// Builds the display run for this message: the body truncated to
    /// `max_chars` characters, quoted, followed by ` -- <attribution>`,
    /// with every literal space replaced by [`NBSP`] so the whole message
    /// scrolls as one unbroken run of visible cells.
    pub fn display_run(&self, max_chars: usize) -> Vec<char> {
        let truncated: String = self.content.chars().take(max_chars).collect();
        let text = format!("\"{truncated}\" -- {}", self.attribution);
        text.chars()
            .map(|c| if c == ' ' { NBSP } else { c })
            .collect()
    }
}
