//! The parsed point-in-time value.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::format;

/// The rendering used by [`Display`](fmt::Display) and by
/// [`date()`](crate::clock::date) / [`datetime()`](crate::clock::datetime).
pub const DEFAULT_TEMPLATE: &str = "Y-m-d H:i:s";

/// A resolved absolute instant, carrying the UTC offset it was parsed or
/// converted into.
///
/// Produced only as the successful result of parsing or conversion; it is an
/// immutable value with no lifecycle of its own. Rendering with the default
/// template reproduces the wall-clock components the input carried.
///
/// Equality compares the absolute instant: two values at different offsets
/// denoting the same instant are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedTime(DateTime<FixedOffset>);

impl ParsedTime {
    pub(crate) fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }

    /// The inner chrono datetime.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Microseconds since the Unix epoch.
    pub fn timestamp_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Render with a template of the same token set used for parsing
    /// (see [`format::to_strftime`]).
    ///
    /// A template with no recognizable tokens is all literals and renders
    /// as itself.
    pub fn format(&self, template: &str) -> String {
        match format::to_strftime(template) {
            Ok(layout) => self.0.format(&layout).to_string(),
            Err(_) => template.to_owned(),
        }
    }

    /// The same instant re-expressed in `zone`.
    pub fn to_zone(&self, zone: Tz) -> ParsedTime {
        ParsedTime(self.0.with_timezone(&zone).fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for ParsedTime {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }
}

impl From<DateTime<Utc>> for ParsedTime {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime.fixed_offset())
    }
}

impl fmt::Display for ParsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_TEMPLATE))
    }
}
