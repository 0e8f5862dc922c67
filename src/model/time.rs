// src/model/time.rs
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::ModelError;

/// Format used by the results site for every checkpoint time.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A wall-clock time of day, whole seconds, no date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(NaiveTime);

impl TimePoint {
    /// `None` for out-of-range components (e.g. hour 24).
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Strict `HH:MM:SS`, surrounding whitespace ignored. Second 60 is refused.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let text = text.trim();
        let invalid = || ModelError::InvalidTimeOfDay { text: s!(text) };
        let time = NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|_| invalid())?;
        // chrono keeps a leap second as nanoseconds past 1e9 on second 59.
        if time.nanosecond() >= 1_000_000_000 {
            return Err(invalid());
        }
        Ok(Self(time))
    }

    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }
}

impl FromStr for TimePoint {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

/// Seconds from `start` to `end` on the same day.
pub fn duration(start: TimePoint, end: TimePoint) -> Result<u32, ModelError> {
    if end < start {
        return Err(ModelError::InvalidDuration { start, end });
    }
    Ok(end.seconds_from_midnight() - start.seconds_from_midnight())
}

/// Shortest human form of a second count.
///
/// `H:MM:SS` once it reaches an hour, `MM:SS` (minutes right-aligned to two
/// columns) once it reaches a minute, plain `Ns` below that.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours != 0 {
        return format!("{hours}:{minutes:02}:{secs:02}");
    }
    if minutes != 0 {
        return format!("{minutes:2}:{secs:02}");
    }
    format!("{secs}s")
}

/// Delta to the leader, e.g. `+10:00`.
pub fn format_gap(seconds: u32) -> String {
    join!("+", format_duration(seconds).trim_start())
}
