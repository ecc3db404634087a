#![forbid(unsafe_code)]

//! The ticker engine: a fixed-width cell buffer fed from a message queue.
//!
//! Provides [`TickerEngine`], which advances one cell per [`tick`] and is
//! paced by the host through [`delay`]. The engine holds no timer and does
//! no I/O; the host re-arms its own wait from `delay()` after every tick
//! and reads the buffer for rendering.
//!
//! [`tick`]: TickerEngine::tick
//! [`delay`]: TickerEngine::delay

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::Duration;

use crate::message::{Message, NBSP};
use crate::pacing::delay_for_backlog;

/// Engine construction parameters.
///
/// # Example
///
/// ```rust
/// use marquee_core::TickerConfig;
///
/// let config = TickerConfig::new(80).max_message_chars(64).spacing(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerConfig {
    viewport_width: usize,
    max_message_chars: usize,
    spacing: usize,
}

impl TickerConfig {
    /// Default cap on message content length before truncation.
    pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 128;
    /// Default number of filler cells between consecutive messages.
    pub const DEFAULT_SPACING: usize = 4;

    /// Configuration for a viewport of `viewport_width` cells with
    /// default truncation and spacing.
    pub fn new(viewport_width: usize) -> Self {
        Self {
            viewport_width,
            max_message_chars: Self::DEFAULT_MAX_MESSAGE_CHARS,
            spacing: Self::DEFAULT_SPACING,
        }
    }

    /// Sets the maximum characters of message content kept before truncation.
    #[must_use]
    pub fn max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }

    /// Sets the number of filler cells emitted between messages.
    #[must_use]
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Engine construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The viewport must hold at least one cell.
    InvalidViewportWidth { width: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewportWidth { width } => {
                write!(f, "viewport width must be > 0 (got {width})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Queue-based character ticker.
///
/// State transitions happen one cell per [`tick`](Self::tick): the oldest
/// cell drops off the front of the buffer and the next owed character is
/// appended at the back. Messages enter through [`ingest`](Self::ingest),
/// are deduplicated by id, formatted once, and drained character by
/// character in FIFO order with a fixed filler gap between them.
#[derive(Debug, Clone)]
pub struct TickerEngine {
    config: TickerConfig,
    /// Exactly `viewport_width` cells for the engine's lifetime.
    buffer: VecDeque<char>,
    /// Formatted runs awaiting display, FIFO.
    queue: VecDeque<Vec<char>>,
    /// Every id ever ingested. Grows for the engine's lifetime; a
    /// long-running host that recycles ids would need an eviction window.
    seen_ids: HashSet<u64>,
    /// Unemitted suffix of the message currently being typed out.
    remainder: VecDeque<char>,
    /// Filler cells still owed before the next message may begin.
    spacing_left: usize,
}

impl TickerEngine {
    /// Creates an engine with an all-filler buffer and nothing queued.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidViewportWidth`] if the configured
    /// viewport is zero cells wide.
    pub fn new(config: TickerConfig) -> Result<Self, ConfigError> {
        if config.viewport_width == 0 {
            return Err(ConfigError::InvalidViewportWidth {
                width: config.viewport_width,
            });
        }
        Ok(Self {
            buffer: std::iter::repeat_n(NBSP, config.viewport_width).collect(),
            queue: VecDeque::new(),
            seen_ids: HashSet::new(),
            remainder: VecDeque::new(),
            spacing_left: 0,
            config,
        })
    }

    /// Adds unseen messages to the queue, in input order.
    ///
    /// Each message's id is checked against the set of ids ever ingested;
    /// repeats are skipped silently, so re-ingesting the host's full list
    /// is idempotent. Newly seen messages are formatted via
    /// [`Message::display_run`] and enqueued. The buffer is not touched.
    pub fn ingest(&mut self, messages: impl IntoIterator<Item = Message>) {
        for message in messages {
            if !self.seen_ids.insert(message.id) {
                continue;
            }
            let run = message.display_run(self.config.max_message_chars);
            self.queue.push_back(run);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                id = message.id,
                queue_len = self.queue.len(),
                "message queued"
            );
        }
    }

    /// Advances the ticker by one cell and returns the buffer contents.
    ///
    /// The oldest cell is dropped from the front, then exactly one cell is
    /// appended at the back, chosen in priority order: owed inter-message
    /// filler, the next character of the in-progress message, the first
    /// character of a freshly dequeued message (consumed the same tick, so
    /// no idle cell is wasted while work is queued), or idle filler.
    ///
    /// Total over every reachable state; never fails.
    pub fn tick(&mut self) -> &[char] {
        self.buffer.pop_front();

        let next = if self.spacing_left > 0 {
            self.spacing_left -= 1;
            NBSP
        } else if let Some(c) = self.remainder.pop_front() {
            if self.remainder.is_empty() {
                self.spacing_left = self.config.spacing;
            }
            c
        } else if let Some(run) = self.queue.pop_front() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                text = %run.iter().collect::<String>(),
                "now displaying"
            );
            self.remainder = run.into();
            let c = self.remainder.pop_front().unwrap_or(NBSP);
            if self.remainder.is_empty() {
                self.spacing_left = self.config.spacing;
            }
            c
        } else {
            NBSP
        };

        self.buffer.push_back(next);
        debug_assert_eq!(self.buffer.len(), self.config.viewport_width);
        self.buffer.make_contiguous()
    }

    /// Total characters still owed to the display: the in-progress
    /// remainder, the owed filler, and every queued run plus its
    /// trailing gap. Pure; drives [`delay`](Self::delay).
    pub fn backlog(&self) -> usize {
        let queued: usize = self
            .queue
            .iter()
            .map(|run| run.len() + self.config.spacing)
            .sum();
        self.remainder.len() + self.spacing_left + queued
    }

    /// Delay the host should wait before the next [`tick`](Self::tick).
    pub fn delay(&self) -> Duration {
        delay_for_backlog(self.backlog())
    }

    /// Current buffer contents as an iterator over cells, oldest first.
    pub fn cells(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer.iter().copied()
    }

    /// Current buffer contents joined into a displayable string.
    pub fn display(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Configured buffer width in cells.
    pub fn viewport_width(&self) -> usize {
        self.config.viewport_width
    }

    /// Messages waiting to start, not counting the in-progress one.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is owed: no remainder, no queue, no filler debt.
    /// Every further tick emits idle filler until new messages arrive.
    pub fn is_idle(&self) -> bool {
        self.remainder.is_empty() && self.queue.is_empty() && self.spacing_left == 0
    }
}
