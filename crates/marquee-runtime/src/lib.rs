#![forbid(unsafe_code)]

//! Host driver for the ticker engine.
//!
//! The engine itself owns no timer; this crate supplies the cooperative
//! loop a host needs: a background thread that drains fed messages into
//! the engine, ticks it, presents the buffer through a [`TickerSink`],
//! and then waits for whatever delay the engine's pacing asks for. The
//! wait doubles as the stop check, so teardown is a single
//! [`TickerHandle::stop`] call.
//!
//! Engine state is only ever touched from the driver thread: `ingest`
//! and `tick` never run concurrently, which is exactly the single
//! logical thread of control the engine's contract assumes.

pub mod driver;
pub mod signal;

pub use driver::{TickerDriver, TickerHandle, TickerSink};
pub use signal::{StopSignal, StopTrigger};
