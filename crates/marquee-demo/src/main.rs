#![forbid(unsafe_code)]

//! Terminal ticker demo.
//!
//! Scrolls a set of canned quotes across one terminal row, re-feeding the
//! full list on every schedule so the engine's dedup is visible: each
//! quote appears exactly once no matter how often it is delivered.
//! Press `q`, `Esc`, or Ctrl-C to quit.
//!
//! Set `MARQUEE_LOG` (e.g. `MARQUEE_LOG=debug`) to stream engine and
//! driver tracing to stderr; redirect stderr to a file to keep the row
//! readable.

use std::error::Error;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, event, execute, terminal};
use marquee_core::{Message, TickerConfig, TickerEngine};
use marquee_runtime::{TickerDriver, TickerSink};

/// Quotes fed to the ticker; index doubles as the message id.
const QUOTES: &[(&str, &str)] = &[
    ("the ticker is a fixed-width character buffer", "readme"),
    ("each tick shifts left and appends one character", "readme"),
    ("messages queue up and drain in arrival order", "readme"),
    ("the display accelerates as the backlog grows", "readme"),
    ("duplicate deliveries are dropped by id", "readme"),
    ("spacing cells keep neighbouring messages apart", "readme"),
];

/// Rewrites the current terminal row in place.
struct RowSink;

impl TickerSink for RowSink {
    fn present(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(line),
        )?;
        out.flush()
    }
}

fn quote_batch(count: usize) -> Vec<Message> {
    QUOTES
        .iter()
        .take(count)
        .enumerate()
        .map(|(id, (content, who))| Message::new(id as u64, *content, *who))
        .collect()
}

fn event_loop(handle: &marquee_runtime::TickerHandle) -> Result<(), Box<dyn Error>> {
    let mut next_feed = Instant::now();
    let mut fed = 0usize;

    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }

        if Instant::now() >= next_feed && fed < QUOTES.len() {
            fed += 1;
            // Deliver the full list every time; dedup keeps repeats out.
            handle.feed(quote_batch(fed));
            next_feed += Duration::from_secs(3);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if std::env::var_os("MARQUEE_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("MARQUEE_LOG"))
            .with_writer(io::stderr)
            .init();
    }

    let (cols, _) = terminal::size()?;
    let width = (cols as usize).clamp(20, 240);
    let engine = TickerEngine::new(TickerConfig::new(width))?;

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), cursor::Hide)?;

    let handle = TickerDriver::spawn(engine, RowSink);
    let result = event_loop(&handle);
    handle.stop();

    execute!(io::stdout(), cursor::Show)?;
    terminal::disable_raw_mode()?;
    println!();
    result
}
