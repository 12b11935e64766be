//! Flight timestamps and durations.
//!
//! Schedules provide times as `YYYY-MM-DDTHH:MM:SS` strings with no zone
//! offset. All times in one schedule are assumed to share a clock, so they
//! are kept as naive date-times and compared directly.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// The only timestamp layout accepted in flight schedules.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A scheduled departure or arrival time.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::FlightTime;
///
/// let dep = FlightTime::parse("2021-09-01T10:00:00").unwrap();
/// let arr = FlightTime::parse("2021-09-01T12:30:00").unwrap();
/// assert_eq!(arr.signed_duration_since(dep), chrono::Duration::minutes(150));
/// assert_eq!(dep.to_string(), "2021-09-01T10:00:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Wrap an existing date-time.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse a time in the fixed `YYYY-MM-DDTHH:MM:SS` layout.
    ///
    /// The layout is lexical: every field is zero-padded, so the input is
    /// always exactly 19 characters. This keeps string order and time order
    /// identical.
    ///
    /// ```
    /// use flight_planner::domain::FlightTime;
    ///
    /// assert!(FlightTime::parse("2021-09-01T23:59:59").is_ok());
    /// assert!(FlightTime::parse("2021-09-01 10:00:00").is_err());
    /// assert!(FlightTime::parse("2021-09-01T9:00:00").is_err());
    /// assert!(FlightTime::parse("2021-09-01T25:00:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.len() != 19 {
            return Err(TimeError::new(s, "expected YYYY-MM-DDTHH:MM:SS"));
        }
        if s.as_bytes()[10] != b'T' {
            return Err(TimeError::new(s, "expected 'T' between date and time"));
        }

        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TimeError::new(s, "not a valid calendar date and time"))
    }

    /// Returns the underlying date-time.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({})", self)
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// Format a duration as `H:MM:SS`, prefixed with `N day(s), ` when it spans
/// at least a day.
///
/// Sub-second precision is dropped. Negative durations borrow a whole day, so
/// minus one hour renders as `-1 day, 23:00:00`.
///
/// ```
/// use chrono::Duration;
/// use flight_planner::domain::format_duration;
///
/// assert_eq!(format_duration(Duration::minutes(330)), "5:30:00");
/// assert_eq!(format_duration(Duration::hours(26)), "1 day, 2:00:00");
/// assert_eq!(format_duration(Duration::hours(49)), "2 days, 1:00:00");
/// ```
pub fn format_duration(duration: Duration) -> String {
    const SECS_PER_DAY: i64 = 24 * 60 * 60;

    let total = duration.num_seconds();
    let days = total.div_euclid(SECS_PER_DAY);
    let rest = total.rem_euclid(SECS_PER_DAY);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}
