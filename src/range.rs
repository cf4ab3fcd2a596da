use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{RANGE_SEPARATOR, TIMESTAMP_FORMAT, prelude::*};

/// The stretch of time an event occupies, read as the half-open interval
/// `[begin, end)`.
///
/// Ordering of the two ends is not enforced: a span built from a negative
/// duration ends before it begins and contains no instant.
///
/// The text form drops seconds; serde keeps both ends at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}{}{}", "begin.format(TIMESTAMP_FORMAT)", RANGE_SEPARATOR, "end.format(TIMESTAMP_FORMAT)")]
pub struct TimeSpan {
    begin: NaiveDateTime,
    end:   NaiveDateTime,
}

/// Error type for time span parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A timestamp did not match `YYYY-MM-DD HH:MM`.
    #[error("Invalid timestamp {input:?}: {source}")]
    InvalidTimestamp {
        input:  String,
        source: chrono::ParseError,
    },

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp; seconds come back as zero.
///
/// # Errors
/// Returns `RangeError::InvalidTimestamp` if the text does not match the pattern.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, RangeError> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|source| RangeError::InvalidTimestamp {
        input: s.to_owned(),
        source,
    })
}

impl TimeSpan {
    pub const fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }

    /// Returns the inclusive start of the span
    pub const fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    /// Returns the exclusive end of the span
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Signed length of the span; negative when the span is reversed
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.begin)
    }

    /// True when the span ends before it begins
    pub fn is_reversed(&self) -> bool {
        self.end < self.begin
    }

    /// Checks if `instant` falls in `[begin, end)`
    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        self.begin <= *instant && *instant < self.end
    }

    /// Checks if either span starts inside the other.
    ///
    /// Only the two start instants are tested, so this is not a full
    /// interval intersection: an empty or reversed span whose start lands
    /// inside `other` overlaps it, while [`TimeSpan::intersects`] says no.
    /// Touching spans (`self.end == other.begin`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        other.contains(&self.begin) || self.contains(&other.begin)
    }

    /// Checks if the two spans share at least one instant.
    pub fn intersects(&self, other: &Self) -> bool {
        self.begin < other.end && other.begin < self.end && !self.is_reversed() && !other.is_reversed()
    }

    /// Checks if this span's time-of-day window sits inside `other`'s.
    ///
    /// Calendar dates are ignored entirely: only `begin.time()` and
    /// `end.time()` of each span are compared, both bounds inclusive.
    pub fn within_daily_window(&self, other: &Self) -> bool {
        self.begin.time() >= other.begin.time() && self.end.time() <= other.end.time()
    }
}

impl FromStr for TimeSpan {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (begin_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let begin = parse_timestamp(begin_str)?;
                let end = parse_timestamp(end_str)?;

                Ok(Self::new(begin, end))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}
