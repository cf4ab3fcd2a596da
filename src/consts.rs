/// Timestamp pattern used for every rendered begin/end (`YYYY-MM-DD HH:MM`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date pattern used when only the calendar day of an event is shown
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the two timestamps of a rendered time range
pub const RANGE_SEPARATOR: &str = " to ";

/// Substituted for an empty description when describing an event
pub const MISSING_DESCRIPTION: &str = "N/A description";

/// Minutes added when the caller gives only whole hours
pub const DEFAULT_MINUTES: i64 = 0;

/// Events are compulsory unless stated otherwise
pub const DEFAULT_COMPULSORY: bool = true;
