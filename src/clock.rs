//! Clock sources used to bracket timed operations.
//!
//! All readings are expressed in nanoseconds since some arbitrary origin as a
//! [`Nanos`] value. A duration is only ever formed by [`elapsed`], which
//! refuses to produce a negative value: a stop reading that precedes its start
//! reading means the clock is broken and the measurement is discarded.

use std::{cell::Cell, time::Instant};

use thiserror::Error;

/// Nanosecond count.
///
/// A `u128` holds roughly $10^{22}$ years worth of nanoseconds, so sums of
/// `runs × iterations` brackets can not realistically overflow. Sums are
/// nonetheless checked.
pub type Nanos = u128;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised when turning two clock readings into a duration.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum ClockError {
    /// The stop reading was earlier than the start reading.
    #[error("clock went backwards: start {start} ns, stop {stop} ns.")]
    Regression {
        /// Reading taken before the timed block.
        start: Nanos,
        /// Reading taken after the timed block.
        stop: Nanos,
    },
}

/// A monotonic source of nanosecond readings.
pub trait Clock {
    /// Take a reading.
    ///
    /// Two successive readings from the same clock must never decrease.
    #[must_use]
    fn now(&self) -> Nanos;
}

/// Compute the duration between two readings.
///
/// # Errors
///
/// Returns [`ClockError::Regression`] if `stop < start`.
#[inline]
pub fn elapsed(start: Nanos, stop: Nanos) -> Result<Nanos, ClockError> {
    stop.checked_sub(start).ok_or(ClockError::Regression { start, stop })
}

// ////////////////////////////////////////////////////////////////////////////
// Monotonic Clock
// ////////////////////////////////////////////////////////////////////////////

/// Wall clock backed by [`std::time::Instant`].
///
/// Readings are relative to the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is now.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Nanos {
        self.origin.elapsed().as_nanos()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Deterministic Clocks
// ////////////////////////////////////////////////////////////////////////////

/// Clock replaying a fixed list of readings.
///
/// Once the list is exhausted the last reading is repeated, so every further
/// bracket measures zero. An empty list always reads zero.
#[derive(Debug)]
pub struct ScriptedClock {
    readings: Vec<Nanos>,
    cursor: Cell<usize>,
}

impl ScriptedClock {
    /// Create a clock that returns `readings` in order.
    #[inline]
    #[must_use]
    pub fn new(readings: impl IntoIterator<Item = Nanos>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            cursor: Cell::new(0),
        }
    }
}

impl Clock for ScriptedClock {
    #[inline]
    fn now(&self) -> Nanos {
        let cursor = self.cursor.get();
        match self.readings.get(cursor) {
            Some(&reading) => {
                self.cursor.set(cursor.saturating_add(1));
                reading
            }
            None => self.readings.last().copied().unwrap_or(0),
        }
    }
}

/// Clock that advances by a fixed step on every reading.
///
/// Every start/stop bracket taken from this clock measures exactly `step`.
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<Nanos>,
    step: Nanos,
}

impl SteppingClock {
    /// Create a clock starting at zero and advancing by `step`.
    #[inline]
    #[must_use]
    pub fn new(step: Nanos) -> Self {
        Self {
            next: Cell::new(0),
            step,
        }
    }
}

impl Clock for SteppingClock {
    #[inline]
    fn now(&self) -> Nanos {
        let reading = self.next.get();
        self.next.set(reading.saturating_add(self.step));
        reading
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Clock, ClockError, MonotonicClock, ScriptedClock, SteppingClock, elapsed};

    #[rstest]
    #[case(0, 0, 0)]
    #[case(5, 12, 7)]
    #[case(0, u128::MAX, u128::MAX)]
    fn elapsed_forward(#[case] start: u128, #[case] stop: u128, #[case] expected: u128) {
        assert_eq!(elapsed(start, stop), Ok(expected));
    }

    #[test]
    fn elapsed_regression() {
        assert_eq!(
            elapsed(10, 9),
            Err(ClockError::Regression { start: 10, stop: 9 })
        );
        assert_eq!(
            elapsed(10, 9).unwrap_err().to_string(),
            "clock went backwards: start 10 ns, stop 9 ns."
        );
    }

    #[test]
    fn monotonic_never_decreases() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..10_000 {
            let reading = clock.now();
            assert!(reading >= last);
            last = reading;
        }
    }

    #[test]
    fn scripted_replays_then_repeats() {
        let clock = ScriptedClock::new([3, 8, 20]);
        assert_eq!(clock.now(), 3);
        assert_eq!(clock.now(), 8);
        assert_eq!(clock.now(), 20);
        assert_eq!(clock.now(), 20);
        assert_eq!(ScriptedClock::new([]).now(), 0);
    }

    #[test]
    fn stepping() {
        let clock = SteppingClock::new(7);
        let start = clock.now();
        let stop = clock.now();
        assert_eq!(elapsed(start, stop), Ok(7));
        assert_eq!(clock.now(), 14);
    }
}
