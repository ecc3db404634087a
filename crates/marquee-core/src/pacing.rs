#![forbid(unsafe_code)]

//! Backlog-to-delay pacing table.
//!
//! The ticker runs at a piecewise-constant rate: small backlogs scroll
//! slowly enough to read, and the delay steps down as the outstanding
//! character count grows so the display catches up instead of letting
//! content accumulate without bound.

use std::time::Duration;

/// Pacing breakpoints, ascending. A backlog strictly below the bound uses
/// the paired delay in milliseconds; the first match wins.
const BREAKPOINTS: &[(usize, u64)] = &[
    (50, 150), // slow and readable
    (100, 70),
    (200, 48),
    (300, 35),
    (400, 20),
    (600, 12),
];

/// Delay once the backlog exceeds every breakpoint: catch-up mode.
const CATCH_UP_DELAY_MS: u64 = 6;

/// Maps an outstanding character backlog to the delay before the next tick.
///
/// Monotonically non-increasing: a larger backlog never slows the ticker.
pub fn delay_for_backlog(backlog: usize) -> Duration {
    for &(bound, delay_ms) in BREAKPOINTS {
        if backlog < bound {
            return Duration::from_millis(delay_ms);
        }
    }
    Duration::from_millis(CATCH_UP_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(backlog: usize) -> u64 {
        delay_for_backlog(backlog).as_millis() as u64
    }

    #[test]
    fn breakpoint_boundaries_are_strict() {
        assert_eq!(ms(0), 150);
        assert_eq!(ms(49), 150);
        assert_eq!(ms(50), 70);
        assert_eq!(ms(99), 70);
        assert_eq!(ms(100), 48);
        assert_eq!(ms(199), 48);
        assert_eq!(ms(200), 35);
        assert_eq!(ms(299), 35);
        assert_eq!(ms(300), 20);
        assert_eq!(ms(399), 20);
        assert_eq!(ms(400), 12);
        assert_eq!(ms(599), 12);
        assert_eq!(ms(600), 6);
        assert_eq!(ms(10_000), 6);
    }

    #[test]
    fn delay_never_increases_with_backlog() {
        let mut prev = u64::MAX;
        for backlog in 0..700 {
            let d = ms(backlog);
            assert!(d <= prev, "delay rose at backlog {backlog}");
            prev = d;
        }
    }
}
