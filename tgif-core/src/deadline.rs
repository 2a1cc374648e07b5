//! Deadline arithmetic: time remaining until the next Friday 17:00 UTC.
//!
//! The weekly deadline never moves, so the whole module reduces to two
//! functions: find the next deadline instant at or after a given time, and
//! decompose the gap into days/hours/minutes/seconds. Both operate on
//! whole seconds; sub-second components are truncated before any
//! comparison so the countdown floors, never rounds up.

use chrono::{DateTime, Datelike, Duration, NaiveTime, SubsecRound, Utc};

/// Deadline day of week, counted from Sunday = 0. Friday.
pub const DEADLINE_WEEKDAY: u32 = 5;

/// Deadline time of day, UTC.
pub const DEADLINE_HOUR: u32 = 17;

pub const SECS_PER_MINUTE: u64 = 60;
pub const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
pub const SECS_PER_WEEK: u64 = 7 * SECS_PER_DAY;

/// A non-negative duration broken down for display.
///
/// Invariants: `hours < 24`, `minutes < 60`, `seconds < 60`, and
/// [`total_seconds`](Remaining::total_seconds) reconstructs the exact
/// whole-second duration the value was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Remaining {
    /// Decompose a whole-second duration.
    pub fn from_seconds(total: u64) -> Self {
        Remaining {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY / SECS_PER_HOUR) as u32,
            minutes: (total % SECS_PER_HOUR / SECS_PER_MINUTE) as u32,
            seconds: (total % SECS_PER_MINUTE) as u32,
        }
    }

    /// Reconstruct the total duration in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY
            + u64::from(self.hours) * SECS_PER_HOUR
            + u64::from(self.minutes) * SECS_PER_MINUTE
            + u64::from(self.seconds)
    }

    /// True exactly at the deadline instant.
    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

/// Next Friday 17:00:00 UTC at or after `now`.
///
/// `now` is truncated to whole seconds first. The comparison against the
/// candidate is strict, so an instant that lands exactly on a deadline
/// returns that same instant rather than jumping a week ahead.
pub fn next_deadline(now: DateTime<Utc>) -> DateTime<Utc> {
    let now = now.trunc_subsecs(0);

    let days_ahead = (DEADLINE_WEEKDAY + 7 - now.weekday().num_days_from_sunday()) % 7;
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let candidate =
        midnight + Duration::days(i64::from(days_ahead)) + Duration::hours(i64::from(DEADLINE_HOUR));

    // Only reachable when days_ahead == 0 and the 17:00 mark has already
    // passed today.
    if candidate < now {
        candidate + Duration::days(7)
    } else {
        candidate
    }
}

/// Time remaining from `now` until the next deadline, floored to whole
/// seconds. Total over all instants: every input produces a valid,
/// non-negative breakdown.
pub fn remaining_until_deadline(now: DateTime<Utc>) -> Remaining {
    let now = now.trunc_subsecs(0);
    let total = (next_deadline(now) - now).num_seconds();
    debug_assert!(total >= 0, "rollover check must keep the deadline ahead of now");
    Remaining::from_seconds(total as u64)
}
