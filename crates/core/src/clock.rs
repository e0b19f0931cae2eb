//! Wall-clock source for id generation and completion dates.

use chrono::{Local, NaiveDate, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// The caller's local calendar day.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicU64,
    today: RwLock<NaiveDate>,
}

impl FixedClock {
    /// Create a clock frozen at `millis` on calendar day `today`.
    pub fn new(millis: u64, today: NaiveDate) -> Self {
        Self {
            millis: AtomicU64::new(millis),
            today: RwLock::new(today),
        }
    }

    /// Move the clock forward.
    pub fn advance_millis(&self, delta: u64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Change the calendar day reported by `today()`.
    pub fn set_today(&self, date: NaiveDate) {
        let mut guard = self.today.write().unwrap_or_else(|e| e.into_inner());
        *guard = date;
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_moves_only_on_request() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let clock = FixedClock::new(100, day);
        assert_eq!(clock.now_millis(), 100);
        clock.advance_millis(5);
        assert_eq!(clock.now_millis(), 105);

        let next = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        clock.set_today(next);
        assert_eq!(clock.today(), next);
    }
}
