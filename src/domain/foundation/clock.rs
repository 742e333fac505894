//! Time source abstraction.
//!
//! Time tracking reads "now" through a [`Clock`] so that elapsed-time
//! arithmetic can be exercised without sleeping.

use std::sync::atomic::{AtomicI64, Ordering};

use super::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    unix_millis: AtomicI64,
}

impl ManualClock {
    /// Creates a clock frozen at the given moment.
    pub fn at(start: Timestamp) -> Self {
        Self {
            unix_millis: AtomicI64::new(start.as_unix_millis()),
        }
    }

    /// Moves the clock forward.
    pub fn advance_millis(&self, millis: i64) {
        self.unix_millis.fetch_add(millis, Ordering::SeqCst);
    }

    /// Moves the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.advance_millis(secs * 1_000);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::at(Timestamp::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let millis = self.unix_millis.load(Ordering::SeqCst);
        Timestamp::from_unix_millis(millis).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_stays_put_until_advanced() {
        let start = Timestamp::from_unix_millis(5_000).unwrap();
        let clock = ManualClock::at(start);

        assert_eq!(clock.now(), start);
        clock.advance_secs(12);
        assert_eq!(clock.now().duration_since(&start).num_seconds(), 12);
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
