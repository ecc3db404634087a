#![forbid(unsafe_code)]

//! The driver loop: feed, tick, present, wait, repeat.

use std::io;
use std::sync::mpsc;
use std::thread;

use marquee_core::{Message, TickerEngine};

use crate::signal::{StopSignal, StopTrigger};

/// Rendering seam between the driver and the host's display.
///
/// Receives the full buffer contents after every tick. Implementations
/// should not assume anything about call frequency; the driver re-paces
/// itself from the engine's backlog after each present.
pub trait TickerSink {
    /// Display one fixed-width line of ticker output.
    fn present(&mut self, line: &str) -> io::Result<()>;
}

impl<F> TickerSink for F
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn present(&mut self, line: &str) -> io::Result<()> {
        self(line)
    }
}

/// Spawns and wires the background ticker loop.
pub struct TickerDriver;

impl TickerDriver {
    /// Starts a driver thread owning `engine`, presenting through `sink`.
    ///
    /// The returned [`TickerHandle`] is the only way to reach the running
    /// ticker: feed it messages, or stop it.
    pub fn spawn<S>(engine: TickerEngine, sink: S) -> TickerHandle
    where
        S: TickerSink + Send + 'static,
    {
        let (feed_tx, feed_rx) = mpsc::channel();
        let (signal, trigger) = StopSignal::new();
        let thread = thread::spawn(move || run(engine, sink, feed_rx, signal));
        TickerHandle {
            feed_tx,
            trigger,
            thread: Some(thread),
        }
    }
}

/// The driver loop body, public for hosts that want to own the thread.
///
/// Per iteration: drain every pending feed batch into the engine, tick
/// once, present the buffer, then park for the engine's current delay or
/// until stopped. Engine state is touched only here, so `ingest` and
/// `tick` are never concurrent.
pub fn run<S: TickerSink>(
    mut engine: TickerEngine,
    mut sink: S,
    feed: mpsc::Receiver<Vec<Message>>,
    stop: StopSignal,
) {
    tracing::info!(width = engine.viewport_width(), "ticker driver started");
    loop {
        while let Ok(batch) = feed.try_recv() {
            tracing::debug!(count = batch.len(), "feeding messages");
            engine.ingest(batch);
        }

        engine.tick();
        if let Err(error) = sink.present(&engine.display()) {
            // Presentation is best-effort; engine state must stay exact.
            tracing::warn!(%error, "sink failed to present, skipping frame");
        }

        if stop.wait_timeout(engine.delay()) {
            break;
        }
    }
    tracing::info!("ticker driver stopped");
}

/// Handle to a running ticker driver.
pub struct TickerHandle {
    feed_tx: mpsc::Sender<Vec<Message>>,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl TickerHandle {
    /// Queues messages for the driver's next iteration.
    ///
    /// Deduplication happens in the engine, so feeding the same batch
    /// repeatedly is harmless. Sends after [`stop`](Self::stop) has begun
    /// are silently dropped.
    pub fn feed(&self, messages: Vec<Message>) {
        let _ = self.feed_tx.send(messages);
    }

    /// Stops the driver and joins its thread. The sole teardown action.
    pub fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.trigger.stop();
        // Don't join in drop to avoid blocking
    }
}
