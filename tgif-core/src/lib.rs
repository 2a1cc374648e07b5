//! # tgif-core
//!
//! Countdown logic for the tgif weekly deadline timer.
//!
//! Everything in this crate is pure: the deadline arithmetic, the
//! week-progress math, and the display formatting are all functions of
//! their inputs. Wall-clock access is abstracted behind [`TimeSource`] so
//! callers (and tests) decide where "now" comes from.
//!
//! The deadline is fixed: every Friday at 17:00:00 UTC. All arithmetic is
//! done in UTC at whole-second precision; callers holding local times must
//! convert before calling in.
//!
//! ## Example
//!
//! ```
//! use tgif_core::{remaining_until_deadline, SystemTimeSource, TimeSource};
//!
//! let clock = SystemTimeSource;
//! let remaining = remaining_until_deadline(clock.now());
//! println!("{remaining}");
//! ```

pub mod deadline;
pub mod format;
pub mod progress;
pub mod time_source;

pub use deadline::{next_deadline, remaining_until_deadline, Remaining};
pub use format::TimeFormat;
pub use progress::{week_fraction, EaseOut};
pub use time_source::{FixedTimeSource, SystemTimeSource, TimeSource};
