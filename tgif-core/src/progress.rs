//! Week progress and progress-bar easing.
//!
//! The countdown week runs deadline to deadline, so progress is just how
//! much of the seven days has been used up. The eased value trails the
//! real one to keep the bar from snapping when a tick lands.

use crate::deadline::{Remaining, SECS_PER_WEEK};

/// Fraction of the deadline week already elapsed, in `[0, 1]`.
///
/// 0 right after a deadline passes, 1 at the next deadline instant.
pub fn week_fraction(remaining: &Remaining) -> f64 {
    let fraction = 1.0 - remaining.total_seconds() as f64 / SECS_PER_WEEK as f64;
    fraction.clamp(0.0, 1.0)
}

/// Ease-out stepper for the displayed progress value.
///
/// Each call to [`step`](EaseOut::step) closes 10% of the gap between the
/// displayed value and the target, so the bar glides toward the real
/// fraction over a handful of frames instead of jumping.
#[derive(Debug, Clone, Copy, Default)]
pub struct EaseOut {
    current: f64,
}

impl EaseOut {
    /// Ease-out factor: fraction of the remaining gap closed per step.
    const FACTOR: f64 = 0.1;

    pub fn new() -> Self {
        EaseOut { current: 0.0 }
    }

    /// Advance toward `target` and return the new displayed value.
    pub fn step(&mut self, target: f64) -> f64 {
        self.current += (target - self.current) * Self::FACTOR;
        self.current
    }

    /// Jump straight to `value` with no easing.
    pub fn snap(&mut self, value: f64) {
        self.current = value;
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}
