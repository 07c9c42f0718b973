//! Wall-clock sources
//!
//! Everything that needs "now" or "today" goes through a [`Clock`] so the
//! day bucketing can be pinned in tests.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::sync::Mutex;

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// Current instant in the local timezone
    fn now(&self) -> DateTime<Local>;

    /// Current calendar day in the local timezone
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A manually driven clock
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock pinned to a local wall-clock time
    pub fn at(local: NaiveDateTime) -> Self {
        let now = Local
            .from_local_datetime(&local)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&local));
        Self::new(now)
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    /// Jump to a new local wall-clock time
    pub fn set(&self, local: NaiveDateTime) {
        let next = Self::at(local).now();
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = next;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_today() {
        let clock = FixedClock::at(morning());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }

    #[test]
    fn test_fixed_clock_advance_crosses_midnight() {
        let clock = FixedClock::at(morning());
        clock.advance(Duration::hours(15));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::at(morning());
        let before = clock.now().timestamp_millis();
        clock.set(morning() + Duration::seconds(2));
        assert_eq!(clock.now().timestamp_millis() - before, 2000);
    }
}
