//! Time sources.
//!
//! Every decay computation reads "now". The models themselves take an explicit
//! `now` argument; [`Clock`] is how the [`crate::brain::Brain`] context object
//! obtains it, so tests can drive time by hand with [`ManualClock`].

use core::cell::Cell;

/// Epoch milliseconds.
pub type Millis = u64;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Whole-and-fractional minutes from `since` to `now`.
///
/// Never discretised. A clock that went backwards yields 0.0 rather than a
/// negative span, so decay can never run in reverse.
pub fn minutes_between(since: Millis, now: Millis) -> f64 {
    now.saturating_sub(since) as f64 / MS_PER_MINUTE
}

/// A source of the current time in epoch milliseconds.
pub trait Clock {
    /// Current time.
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Adapts a `now()` function into a [`Clock`].
#[derive(Clone, Copy, Debug)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> Millis> Clock for FnClock<F> {
    fn now_ms(&self) -> Millis {
        (self.0)()
    }
}

/// Hand-driven clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    /// Start at `start` epoch milliseconds.
    pub fn new(start: Millis) -> Self {
        Self { now: Cell::new(start) }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Move forward by a (possibly fractional) number of minutes.
    pub fn advance_minutes(&self, minutes: f64) {
        self.advance_ms((minutes * MS_PER_MINUTE) as u64);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// Wall clock backed by [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as Millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_between() {
        assert_eq!(minutes_between(0, 90_000), 1.5);
        assert_eq!(minutes_between(1_000, 1_000), 0.0);
    }

    #[test]
    fn test_minutes_between_backwards_clock_is_zero() {
        assert_eq!(minutes_between(10_000, 5_000), 0.0);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        clock.advance_minutes(2.0);
        assert_eq!(clock.now_ms(), 121_000);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn test_fn_clock() {
        let fixed = FnClock(|| 42u64);
        assert_eq!(fixed.now_ms(), 42);
        assert_eq!((&fixed).now_ms(), 42);
    }
}
