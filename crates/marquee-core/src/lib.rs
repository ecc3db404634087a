#![forbid(unsafe_code)]

//! Core state machine for a backlog-paced character ticker.
//!
//! A [`TickerEngine`] owns a fixed-width cell buffer and a FIFO queue of
//! formatted messages. Each [`TickerEngine::tick`] shifts the buffer one
//! cell to the left and appends the next owed character: spacing filler,
//! the next character of the in-progress message, the first character of
//! a freshly dequeued message, or idle filler. The outstanding character
//! backlog drives an adaptive delay so the display speeds up when it
//! falls behind and stays readable when it is not.
//!
//! The engine performs no I/O and owns no timer. A host drives it:
//!
//! ```rust
//! use marquee_core::{Message, TickerConfig, TickerEngine};
//!
//! let mut engine = TickerEngine::new(TickerConfig::new(20)).unwrap();
//! engine.ingest([Message::new(1, "hello", "alice")]);
//! let cells = engine.tick();
//! assert_eq!(cells.len(), 20);
//! let _next_wait = engine.delay();
//! ```

pub mod engine;
pub mod message;
pub mod pacing;

pub use engine::{ConfigError, TickerConfig, TickerEngine};
pub use message::{Message, NBSP};
pub use pacing::delay_for_backlog;
