//! Parsing entry points.
//!
//! [`TimeParser`] is the configuration context: it carries the zone used to
//! anchor naive (offset-less) inputs. Construct one with an explicit zone,
//! or let the module-level functions snapshot the process-wide setting at
//! the outermost entry point — nothing below that reads the global.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use regex::Regex;

use crate::error::{Result, TimeError};
use crate::time::ParsedTime;
use crate::{format, layout, zone};

/// A zone-carrying parser.
#[derive(Debug, Clone, Copy)]
pub struct TimeParser {
    zone: Tz,
}

impl TimeParser {
    /// A parser anchoring naive inputs in `zone`.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// A parser using the current process-wide zone
    /// (see [`set_timezone`](crate::zone::set_timezone)).
    pub fn current() -> Self {
        Self::new(zone::timezone())
    }

    /// The zone naive inputs are anchored in.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Parse a date/time string, inferring its layout.
    ///
    /// Separators are normalized first, then candidate layouts are tried in
    /// fixed priority order; the first structural match wins. Inputs
    /// carrying an explicit offset or `Z` anchor themselves; bare dates
    /// default to midnight.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Parse`] when no candidate layout matches, or
    /// when a structurally matching input fails calendar validation.
    pub fn parse(&self, input: &str) -> Result<ParsedTime> {
        let canonical = layout::canonicalize(input)?;
        layout::infer(&canonical, self.zone).map(ParsedTime::new)
    }

    /// Parse a date/time string against an explicit template; the template
    /// is authoritative and no inference happens.
    ///
    /// The template is translated token-for-token
    /// (see [`format::to_strftime`]) and delegated to chrono, trying the
    /// most capable reading first: offset-bearing, then naive date + time,
    /// then bare date at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Format`] for a template with no recognizable
    /// tokens, [`TimeError::Parse`] when the input does not match it.
    pub fn parse_with_format(&self, input: &str, template: &str) -> Result<ParsedTime> {
        let strftime = format::to_strftime(template)?;
        let input = input.trim();
        if let Ok(dt) = DateTime::parse_from_str(input, &strftime) {
            return Ok(ParsedTime::new(dt));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, &strftime) {
            return layout::anchor_in_zone(naive, self.zone).map(ParsedTime::new);
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, &strftime) {
            return layout::anchor_in_zone(date.and_time(NaiveTime::MIN), self.zone)
                .map(ParsedTime::new);
        }
        Err(TimeError::Parse(format!(
            "'{input}' does not match template '{template}'"
        )))
    }

    /// Find and parse the first date/time-shaped substring of `content`.
    ///
    /// Shapes are tried in the same priority order as layout inference;
    /// shape order outranks position in the text. `None` is the not-found
    /// outcome — unlike [`parse`](Self::parse), there is no error channel.
    pub fn extract_from_content(&self, content: &str) -> Option<ParsedTime> {
        for shape in layout::EXTRACT_SHAPES.iter() {
            if let Some(found) = shape.find(content) {
                log::trace!("extracted '{}' from content", found.as_str());
                return self.parse(found.as_str()).ok();
            }
        }
        None
    }

    /// Find and parse the first substring of `content` shaped like
    /// `template`.
    ///
    /// `None` when nothing matches; a template with no recognizable tokens
    /// can match no substring and is likewise `None`.
    pub fn extract_from_content_with_format(
        &self,
        content: &str,
        template: &str,
    ) -> Option<ParsedTime> {
        let pattern = format::to_search_pattern(template)?;
        let shape = Regex::new(&pattern).ok()?;
        let found = shape.find(content)?;
        self.parse_with_format(found.as_str(), template).ok()
    }

    /// Parse `input` (naive readings anchored in this parser's zone) and
    /// re-express the same absolute instant in `target_zone`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Parse`] when `input` does not parse and
    /// [`TimeError::Zone`] when `target_zone` is not a recognized IANA
    /// zone name.
    pub fn convert_zone(&self, input: &str, target_zone: &str) -> Result<ParsedTime> {
        let parsed = self.parse(input)?;
        let target = zone::resolve_zone(target_zone)?;
        Ok(parsed.to_zone(target))
    }
}

/// Parse with layout inference in the process-wide zone.
/// See [`TimeParser::parse`].
pub fn parse(input: &str) -> Result<ParsedTime> {
    TimeParser::current().parse(input)
}

/// Parse against an explicit template in the process-wide zone.
/// See [`TimeParser::parse_with_format`].
pub fn parse_with_format(input: &str, template: &str) -> Result<ParsedTime> {
    TimeParser::current().parse_with_format(input, template)
}

/// Extract the first date/time-shaped substring, process-wide zone.
/// See [`TimeParser::extract_from_content`].
pub fn extract_from_content(content: &str) -> Option<ParsedTime> {
    TimeParser::current().extract_from_content(content)
}

/// Extract the first template-shaped substring, process-wide zone.
/// See [`TimeParser::extract_from_content_with_format`].
pub fn extract_from_content_with_format(content: &str, template: &str) -> Option<ParsedTime> {
    TimeParser::current().extract_from_content_with_format(content, template)
}

/// Convert `input` into `target_zone`, reading naive inputs in the
/// process-wide zone. See [`TimeParser::convert_zone`].
pub fn convert_zone(input: &str, target_zone: &str) -> Result<ParsedTime> {
    TimeParser::current().convert_zone(input, target_zone)
}

/// Convert `input` into `target_zone`, reading naive inputs in
/// `source_zone`.
///
/// # Errors
///
/// Returns [`TimeError::Zone`] when either zone name is unrecognized and
/// [`TimeError::Parse`] when `input` does not parse.
pub fn convert_zone_from(input: &str, target_zone: &str, source_zone: &str) -> Result<ParsedTime> {
    let source = zone::resolve_zone(source_zone)?;
    TimeParser::new(source).convert_zone(input, target_zone)
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Any datetime rendered in any supported separator style parses
        // back to the same wall reading.
        #[test]
        fn roundtrip_across_separators(
            year in 1970i32..=2099,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..=23,
            minute in 0u32..=59,
            second in 0u32..=59,
            sep in prop::sample::select(vec!['-', '/', '.']),
        ) {
            let input = format!(
                "{year:04}{sep}{month:02}{sep}{day:02} {hour:02}:{minute:02}:{second:02}"
            );
            let parsed = TimeParser::new(Tz::UTC).parse(&input).unwrap();
            let canonical = format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            );
            prop_assert_eq!(parsed.format("Y-m-d H:i:s"), canonical);
        }

        // Bare dates always land on midnight.
        #[test]
        fn bare_date_is_midnight(
            year in 1970i32..=2099,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let input = format!("{year:04}-{month:02}-{day:02}");
            let parsed = TimeParser::new(Tz::UTC).parse(&input).unwrap();
            prop_assert_eq!(
                parsed.format("Y-m-d H:i:s"),
                format!("{input} 00:00:00")
            );
        }

        // Conversion never moves the absolute instant.
        #[test]
        fn conversion_preserves_timestamp(
            year in 1970i32..=2099,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..=23,
        ) {
            let input = format!("{year:04}-{month:02}-{day:02} {hour:02}:30:00");
            let parser = TimeParser::new(Tz::UTC);
            let parsed = parser.parse(&input).unwrap();
            let converted = parser.convert_zone(&input, "Asia/Tokyo").unwrap();
            prop_assert_eq!(parsed.timestamp(), converted.timestamp());
        }
    }
}
