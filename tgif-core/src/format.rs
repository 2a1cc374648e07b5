//! Display formatting: countdown text, 12h/24h clock conversion, and the
//! deadline label shown under the timer.

use std::fmt;
use std::str::FromStr;

use crate::deadline::{Remaining, DEADLINE_HOUR};

/// Clock format for the deadline label. Round-trips through the strings
/// `"12h"` and `"24h"`, which is also how the preference is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "12h",
            TimeFormat::TwentyFourHour => "24h",
        }
    }

    /// The other format. The UI flips between the two with a single key.
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
        }
    }

    /// Hour as displayed in this format. In 12-hour mode, 0 and 12 both
    /// render as 12.
    pub fn display_hour(self, hour: u32) -> u32 {
        match self {
            TimeFormat::TwelveHour => {
                let h = hour % 12;
                if h == 0 { 12 } else { h }
            }
            TimeFormat::TwentyFourHour => hour,
        }
    }

    /// AM/PM marker, only meaningful in 12-hour mode.
    pub fn period(self, hour: u32) -> Option<&'static str> {
        match self {
            TimeFormat::TwelveHour => Some(if hour >= 12 { "PM" } else { "AM" }),
            TimeFormat::TwentyFourHour => None,
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeFormatError(String);

impl fmt::Display for ParseTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time format {:?} (expected \"12h\" or \"24h\")", self.0)
    }
}

impl std::error::Error for ParseTimeFormatError {}

impl FromStr for TimeFormat {
    type Err = ParseTimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12h" => Ok(TimeFormat::TwelveHour),
            "24h" => Ok(TimeFormat::TwentyFourHour),
            other => Err(ParseTimeFormatError(other.to_string())),
        }
    }
}

/// The deadline line under the countdown, e.g. `FRIDAY 17:00 UTC` or
/// `FRIDAY 5:00 PM UTC`.
pub fn deadline_label(format: TimeFormat) -> String {
    let hour = format.display_hour(DEADLINE_HOUR);
    match format.period(DEADLINE_HOUR) {
        Some(period) => format!("FRIDAY {hour}:00 {period} UTC"),
        None => format!("FRIDAY {hour}:00 UTC"),
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
