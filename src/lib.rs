mod consts;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use range::{RangeError, TimeSpan, format_timestamp, parse_timestamp};
pub use types::{EventType, EventTypeError, Validation};

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A titled, time-bounded calendar entry.
///
/// The end is derived once, at construction, as `begin + hours + minutes`
/// and never recomputed. Fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    title:       String,
    description: String,
    location:    String,
    #[serde(rename = "type")]
    event_type:  EventType,
    compulsory:  bool,
    span:        TimeSpan,
}

/// Error type for event construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// Title is empty or whitespace (strict validation only).
    #[error("Event title must not be empty")]
    EmptyTitle,

    /// Hours or minutes are negative (strict validation only).
    #[error("Invalid duration: {hours}h {minutes}m (hours and minutes must not be negative)")]
    InvalidDuration { hours: i64, minutes: i64 },

    /// The end timestamp cannot be represented.
    #[error("Event end out of range: {begin} plus {hours}h {minutes}m")]
    OutOfRange {
        begin:   NaiveDateTime,
        hours:   i64,
        minutes: i64,
    },
}

/// Collects the optional parts of an [`Event`] before computing its end.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    title:       String,
    begin:       NaiveDateTime,
    hours:       i64,
    minutes:     i64,
    description: String,
    location:    String,
    event_type:  EventType,
    compulsory:  bool,
    validation:  Validation,
}

impl EventBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Minutes added on top of the whole hours (default 0)
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn compulsory(mut self, compulsory: bool) -> Self {
        self.compulsory = compulsory;
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Shorthand for `validation(Validation::Strict)`
    pub fn strict(self) -> Self {
        self.validation(Validation::Strict)
    }

    /// Computes the end timestamp and builds the event.
    ///
    /// In legacy mode negative hours or minutes are accepted and produce an
    /// event that ends before it begins.
    ///
    /// # Errors
    /// Returns `EventError::EmptyTitle` or `EventError::InvalidDuration` under
    /// strict validation, and `EventError::OutOfRange` when the end cannot be
    /// represented.
    pub fn build(self) -> Result<Event, EventError> {
        let Self {
            title,
            begin,
            hours,
            minutes,
            description,
            location,
            event_type,
            compulsory,
            validation,
        } = self;

        if validation.is_strict() {
            if title.trim().is_empty() {
                return Err(EventError::EmptyTitle);
            }
            if hours < 0 || minutes < 0 {
                return Err(EventError::InvalidDuration { hours, minutes });
            }
        }

        let out_of_range = || EventError::OutOfRange { begin, hours, minutes };
        let duration = TimeDelta::try_hours(hours)
            .zip(TimeDelta::try_minutes(minutes))
            .and_then(|(h, m)| h.checked_add(&m))
            .ok_or_else(out_of_range)?;
        let end = begin.checked_add_signed(duration).ok_or_else(out_of_range)?;
        let span = TimeSpan::new(begin, end);

        if span.is_reversed() {
            warn!(%title, %span, hours, minutes, "event ends before it begins");
        }
        debug!(%title, %span, %event_type, %validation, "built event");

        Ok(Event {
            title,
            description,
            location,
            event_type,
            compulsory,
            span,
        })
    }
}

impl Event {
    /// Creates an event with default description, location, type and
    /// compulsory flag, lasting `hours` from `begin`.
    ///
    /// # Errors
    /// Returns `EventError::OutOfRange` if the end cannot be represented.
    pub fn new(title: impl Into<String>, begin: NaiveDateTime, hours: i64) -> Result<Self, EventError> {
        Self::builder(title, begin, hours).build()
    }

    /// Starts a builder preloaded with the defaults
    pub fn builder(title: impl Into<String>, begin: NaiveDateTime, hours: i64) -> EventBuilder {
        EventBuilder {
            title: title.into(),
            begin,
            hours,
            minutes: DEFAULT_MINUTES,
            description: String::new(),
            location: String::new(),
            event_type: EventType::default(),
            compulsory: DEFAULT_COMPULSORY,
            validation: Validation::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub const fn event_type(&self) -> EventType {
        self.event_type
    }

    pub const fn is_compulsory(&self) -> bool {
        self.compulsory
    }

    pub const fn begin(&self) -> NaiveDateTime {
        self.span.begin()
    }

    pub const fn end(&self) -> NaiveDateTime {
        self.span.end()
    }

    /// The `[begin, end)` span the event occupies
    pub const fn span(&self) -> TimeSpan {
        self.span
    }

    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }

    /// Returns `"<begin> to <end>"` with both ends as `YYYY-MM-DD HH:MM`.
    pub fn formatted_time_range(&self) -> String {
        self.span.to_string()
    }

    /// Returns `"<description> at <location> on <date>"`.
    ///
    /// An empty description reads as `N/A description`; the date is the
    /// calendar day of `begin` only.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Checks if either event begins inside the other's `[begin, end)`.
    ///
    /// See [`TimeSpan::overlaps`]: only start instants are tested.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.span.overlaps(&other.span)
    }

    /// Checks if this event's clock times fall inside `other`'s, whatever
    /// day either happens on.
    pub fn in_range(&self, other: &Self) -> bool {
        self.span.within_daily_window(&other.span)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = if self.description.is_empty() {
            MISSING_DESCRIPTION
        } else {
            self.description.as_str()
        };
        write!(
            f,
            "{description} at {} on {}",
            self.location,
            self.begin().date().format(DATE_FORMAT)
        )
    }
}
