//! # flextime
//!
//! Flexible date/time parsing for human-entered input.
//!
//! Arbitrary date/time strings are parsed into a resolved [`ParsedTime`]
//! instant, either against an explicit PHP-style template (`Y-m-d H:i:s`)
//! or by layout inference over an ordered candidate list. Parsing never
//! guesses: input that matches no known layout is an error, not a
//! best-effort reading.
//!
//! ```
//! use flextime::TimeParser;
//! use chrono_tz::Tz;
//!
//! let parser = TimeParser::new(Tz::UTC);
//! let t = parser.parse("02.jan.2006 15:04:05").unwrap();
//! assert_eq!(t.format("Y-m-d H:i:s"), "2006-01-02 15:04:05");
//!
//! assert!(parser.parse("20060102").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`parse`] — [`TimeParser`] and the parse/extract/convert entry points
//! - [`format`] — template-token translation (`Y m d H i s` …)
//! - [`time`] — the [`ParsedTime`] value and its renderer
//! - [`zone`] — process-wide timezone state
//! - [`clock`] — sub-second clock readers and the function cost timer
//! - [`error`] — error types

pub mod clock;
pub mod error;
pub mod format;
mod layout;
pub mod parse;
pub mod time;
pub mod zone;

pub use clock::{date, datetime, func_cost, microsecond, millisecond, nanosecond, now, second};
pub use error::{Result, TimeError};
pub use parse::{
    convert_zone, convert_zone_from, extract_from_content, extract_from_content_with_format,
    parse, parse_with_format, TimeParser,
};
pub use time::{ParsedTime, DEFAULT_TEMPLATE};
pub use zone::{set_timezone, timezone};
