use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category tag attached to every event.
/// Prints and parses as its lowercase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[display(fmt = "meeting")]
    Meeting,
    #[display(fmt = "task")]
    Task,
    #[display(fmt = "reminder")]
    Reminder,
    /// Used when the caller does not categorise the event
    #[default]
    #[display(fmt = "other")]
    Other,
}

/// Error returned when an event type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event type: {0} (expected meeting, task, reminder or other)")]
pub struct EventTypeError(pub String);

impl EventType {
    /// All known event types, in declaration order
    pub const ALL: [Self; 4] = [Self::Meeting, Self::Task, Self::Reminder, Self::Other];
}

impl FromStr for EventType {
    type Err = EventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| EventTypeError(s.to_owned()))
    }
}

/// How strictly an event's construction inputs are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Validation {
    /// Accepts empty titles and negative durations; a negative duration
    /// yields an event that ends before it begins.
    #[default]
    #[display(fmt = "legacy")]
    Legacy,
    /// Rejects empty titles and negative hours or minutes.
    #[display(fmt = "strict")]
    Strict,
}

impl Validation {
    #[inline]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
