//! Clock abstraction for the countdown.
//!
//! The deadline math takes `now` as an explicit argument, so the only
//! place wall-clock state enters the picture is whoever supplies that
//! argument. This trait pins that down: the presentation layer asks a
//! `TimeSource` for the current instant instead of reaching for the
//! system clock directly, and tests swap in a frozen source rather than
//! mocking time.
//!
//! Instants are always UTC. A source backed by something local (an RTC,
//! a zoned clock) must convert before returning.

use chrono::{DateTime, Utc};

pub trait TimeSource {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The process-wide system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A source frozen at a single instant.
///
/// Used by tests and by replay-style invocations that want the countdown
/// evaluated at a specific point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedTimeSource { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_time_source_is_sane() {
        let clock = SystemTimeSource;
        let now = clock.now();

        // Should be somewhere in the current century.
        assert!(now > Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert!(now < Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_fixed_time_source_never_advances() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0).unwrap();
        let clock = FixedTimeSource::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
