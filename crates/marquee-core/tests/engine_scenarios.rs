//! End-to-end scenarios for the ticker engine.

use marquee_core::{Message, NBSP, TickerConfig, TickerEngine};

fn engine(width: usize) -> TickerEngine {
    TickerEngine::new(TickerConfig::new(width)).unwrap()
}

/// Run the engine `n` ticks, returning the stream of appended cells
/// (the last cell of the buffer after each tick).
fn emit(engine: &mut TickerEngine, n: usize) -> Vec<char> {
    (0..n)
        .map(|_| *engine.tick().last().expect("buffer is never empty"))
        .collect()
}

#[test]
fn buffer_length_is_invariant() {
    let mut engine = engine(12);
    engine.ingest([
        Message::new(1, "first message", "a"),
        Message::new(2, "second", "b"),
    ]);
    for i in 0..500 {
        assert_eq!(engine.tick().len(), 12, "length drifted at tick {i}");
        if i == 100 {
            engine.ingest([Message::new(3, "late arrival", "c")]);
        }
    }
}

#[test]
fn reingesting_a_seen_id_is_a_no_op() {
    let mut engine = engine(10);
    let msg = Message::new(7, "once", "x");
    engine.ingest([msg.clone()]);
    engine.ingest([msg.clone()]);
    assert_eq!(engine.queue_len(), 1);

    // Same id with different content is still a repeat.
    engine.ingest([Message::new(7, "changed", "y")]);
    assert_eq!(engine.queue_len(), 1);
}

#[test]
fn dedup_spans_multiple_ingest_calls() {
    let mut engine = engine(10);
    engine.ingest([Message::new(1, "a", "x"), Message::new(2, "b", "x")]);
    // Host re-delivers its full list plus one new entry.
    engine.ingest([
        Message::new(1, "a", "x"),
        Message::new(2, "b", "x"),
        Message::new(3, "c", "x"),
    ]);
    assert_eq!(engine.queue_len(), 3);
}

#[test]
fn messages_drain_in_fifo_order_with_exact_gaps() {
    let spacing = TickerConfig::DEFAULT_SPACING;
    let messages = [
        Message::new(1, "alpha", "a"),
        Message::new(2, "beta", "b"),
        Message::new(3, "gamma", "c"),
    ];

    let mut expected = Vec::new();
    for m in &messages {
        expected.extend(m.display_run(128));
        expected.extend(std::iter::repeat_n(NBSP, spacing));
    }

    let mut engine = engine(8);
    engine.ingest(messages);
    let total = engine.backlog();
    assert_eq!(total, expected.len());
    assert_eq!(emit(&mut engine, total), expected);
    assert!(engine.is_idle());
}

#[test]
fn idle_engine_fills_viewport_with_glyph() {
    let mut engine = engine(6);
    for _ in 0..6 {
        engine.tick();
    }
    assert_eq!(engine.display(), "\u{a0}".repeat(6));
    // Stays that way forever.
    engine.tick();
    assert_eq!(engine.display(), "\u{a0}".repeat(6));
}

#[test]
fn narrow_viewport_scenario() {
    // width 5, message formats to `"hi" -- x` with NBSP for spaces.
    let mut engine = engine(5);
    engine.ingest([Message::new(1, "hi", "x")]);

    let run = Message::new(1, "hi", "x").display_run(128);
    assert_eq!(run.len(), 9);
    assert_eq!(engine.backlog(), 9 + 4);

    for _ in 0..13 {
        assert_eq!(engine.tick().len(), 5);
    }
    // Tail of the text followed by glyph padding.
    assert_eq!(engine.display(), format!("x{}", "\u{a0}".repeat(4)));
    assert!(engine.is_idle());
}

#[test]
fn pacing_reacts_to_backlog() {
    let mut engine = engine(10);
    assert_eq!(engine.delay().as_millis(), 150);

    // Six maximally truncated messages push the backlog past 600.
    let long = "y".repeat(200);
    engine.ingest((0..6).map(|i| Message::new(i, long.clone(), "z")));
    assert!(engine.backlog() > 600);
    assert_eq!(engine.delay().as_millis(), 6);

    // Drain until under 50 owed; back to the readable rate.
    while engine.backlog() >= 50 {
        engine.tick();
    }
    assert_eq!(engine.delay().as_millis(), 150);
}

#[test]
fn no_idle_cell_between_spacing_and_next_message() {
    let mut engine = engine(4);
    engine.ingest([Message::new(1, "a", "x"), Message::new(2, "b", "y")]);
    let first = Message::new(1, "a", "x").display_run(128);

    emit(&mut engine, first.len());
    let gap_then_next = emit(&mut engine, TickerConfig::DEFAULT_SPACING + 1);
    assert_eq!(&gap_then_next[..4], ['\u{a0}'; 4]);
    // The very next cell after the gap is the second message's opening quote.
    assert_eq!(gap_then_next[4], '"');
}
