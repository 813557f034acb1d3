//! Time source used when stamping new places.
//!
//! Production code uses [`SystemClock`]; tests use [`ManualClock`] so that
//! `createdAt` values and newest-first ordering are reproducible.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use std::cell::Cell;

pub trait Clock {
    /// Current time, in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// Deterministic clock that advances by a fixed step on every read.
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use placebook::clock::{Clock, ManualClock};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let clock = ManualClock::new(start).with_step(Duration::minutes(1));
/// assert_eq!(clock.now(), start);
/// assert_eq!(clock.now(), start + Duration::minutes(1));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
            step: Duration::zero(),
        }
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.now.get();
        self.now.set(current + self.step);
        current
    }
}
