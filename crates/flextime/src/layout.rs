//! Candidate layouts and separator canonicalization.
//!
//! Inference never guesses: input is first canonicalized (date separators,
//! textual months, date/time joiners), then tried against a fixed, ordered
//! list of structural shapes. The first shape that matches decides the
//! layout; no match is a hard error. Ordering is the tie-break policy for
//! ambiguous strings, most specific (date + time + fraction + offset) down
//! to least specific (bare date).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TimeError};

/// How a matched layout is resolved into an absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// The input carries its own UTC offset.
    Offset,
    /// Offset with a seconds component, which strftime cannot express;
    /// the trailing `±hh:mm:ss` is peeled off and applied by hand.
    OffsetSeconds,
    /// Trailing `Z`: the instant is UTC.
    Zulu,
    /// Wall-clock only; anchored in the caller's zone.
    Naive,
    /// Bare date; time-of-day defaults to midnight.
    DateOnly,
}

struct Layout {
    shape: Regex,
    strftime: &'static str,
    resolution: Resolution,
}

/// Candidate layouts in inference priority order.
static CANDIDATES: Lazy<Vec<Layout>> = Lazy::new(|| {
    let layout = |shape: &str, strftime: &'static str, resolution| Layout {
        shape: Regex::new(shape).expect("candidate shape is a valid regex"),
        strftime,
        resolution,
    };
    vec![
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}[+-]\d{2}:\d{2}:\d{2}$",
            "%Y-%m-%d %H:%M:%S",
            Resolution::OffsetSeconds,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}\.\d{1,9}[+-]\d{2}:?\d{2}$",
            "%Y-%m-%d %H:%M:%S%.f%z",
            Resolution::Offset,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}[+-]\d{2}:?\d{2}$",
            "%Y-%m-%d %H:%M:%S%z",
            Resolution::Offset,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}\.\d{1,9}Z$",
            "%Y-%m-%d %H:%M:%S%.fZ",
            Resolution::Zulu,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}Z$",
            "%Y-%m-%d %H:%M:%SZ",
            Resolution::Zulu,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}\.\d{1,9}$",
            "%Y-%m-%d %H:%M:%S%.f",
            Resolution::Naive,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}$",
            "%Y-%m-%d %H:%M:%S",
            Resolution::Naive,
        ),
        layout(
            r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}$",
            "%Y-%m-%d %H:%M",
            Resolution::Naive,
        ),
        layout(r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d", Resolution::DateOnly),
    ]
});

/// Unanchored shapes for free-text extraction, tried in the same priority
/// order as the candidate list: numeric date first, then textual month.
/// Shape order outranks position in the text.
pub(crate) static EXTRACT_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"\d{4}[-/.]\d{2}[-/.]\d{2}(?:[\sT:-]+\d{1,2}:\d{2}(?::\d{2})?(?:\.\d{1,9})?(?:\s?[+-]\d{2}:?\d{2}(?::\d{2})?|Z)?)?",
        )
        .expect("extraction shape is a valid regex"),
        Regex::new(r"\d{1,2}[-/.][A-Za-z]{3,9}[-/.]\d{4}(?:[\sT:-]+\d{1,2}:\d{2}(?::\d{2})?)?")
            .expect("extraction shape is a valid regex"),
    ]
});

// Canonicalization rewrites. Date separators and joiners vary freely in
// human input; the candidate list only ever sees the canonical form.
static MONTH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[-/.]([A-Za-z]{3,9})[-/.](\d{4})").expect("regex"));
static NUM_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[./](\d{2})[./](\d{2})").expect("regex"));
static JOINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})[\sT:-]+(\d{1,2}:\d{2})").expect("regex"));
static ZONE_ABBR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([+-]\d{2}:?\d{2}(?::\d{2})?)\s+[A-Za-z]{2,5}$").expect("regex"));
static OFFSET_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([+-]\d{2}:?\d{2}(?::\d{2})?)$").expect("regex"));

/// Month name to number (1-12); 3-letter abbreviations and full English
/// names, case-insensitive.
fn month_number(name: &str) -> Option<u32> {
    match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" | "sept" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Rewrite an input string into the canonical form the candidate list
/// matches against: `-` date separators, a single-space date/time joiner,
/// no zone-name suffix, no gap before a trailing offset.
///
/// # Errors
///
/// Returns [`TimeError::Parse`] for a textual-month date whose month name
/// does not resolve.
pub(crate) fn canonicalize(input: &str) -> Result<String> {
    let trimmed = input.trim();

    let rewritten = match MONTH_DATE.captures(trimmed) {
        Some(caps) => {
            let month = month_number(&caps[2]).ok_or_else(|| {
                TimeError::Parse(format!("unresolvable month name '{}'", &caps[2]))
            })?;
            let day: u32 = caps[1]
                .parse()
                .map_err(|_| TimeError::Parse(format!("invalid day in '{trimmed}'")))?;
            let rest = &trimmed[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
            format!("{}-{month:02}-{day:02}{rest}", &caps[3])
        }
        None => trimmed.to_owned(),
    };

    let s = NUM_DATE.replace(&rewritten, "$1-$2-$3");
    let s = JOINER.replace(&s, "$1 $2");
    let s = ZONE_ABBR.replace(&s, "$1");
    let s = OFFSET_SPACE.replace(&s, "$1");
    Ok(s.into_owned())
}

/// Try the candidate layouts against a canonicalized input; the first
/// structural match is resolved in `zone`, no match fails closed.
pub(crate) fn infer(canonical: &str, zone: Tz) -> Result<DateTime<FixedOffset>> {
    for layout in CANDIDATES.iter() {
        if !layout.shape.is_match(canonical) {
            continue;
        }
        log::debug!("'{canonical}' matched {:?} layout", layout.resolution);
        return resolve(layout, canonical, zone);
    }
    Err(TimeError::Parse(format!(
        "'{canonical}' matches no candidate layout"
    )))
}

fn resolve(layout: &Layout, s: &str, zone: Tz) -> Result<DateTime<FixedOffset>> {
    let parse_err = |e: chrono::ParseError| TimeError::Parse(format!("'{s}': {e}"));
    match layout.resolution {
        Resolution::Offset => DateTime::parse_from_str(s, layout.strftime).map_err(parse_err),
        Resolution::OffsetSeconds => {
            // The shape guarantees an ASCII tail of exactly "±hh:mm:ss".
            let (wall, offset) = s.split_at(s.len() - 9);
            let naive = NaiveDateTime::parse_from_str(wall, layout.strftime).map_err(parse_err)?;
            apply_offset(naive, offset)
        }
        Resolution::Zulu => {
            let naive = NaiveDateTime::parse_from_str(s, layout.strftime).map_err(parse_err)?;
            Ok(naive.and_utc().fixed_offset())
        }
        Resolution::Naive => {
            let naive = NaiveDateTime::parse_from_str(s, layout.strftime).map_err(parse_err)?;
            anchor_in_zone(naive, zone)
        }
        Resolution::DateOnly => {
            let date = NaiveDate::parse_from_str(s, layout.strftime).map_err(parse_err)?;
            anchor_in_zone(date.and_time(NaiveTime::MIN), zone)
        }
    }
}

fn apply_offset(naive: NaiveDateTime, offset: &str) -> Result<DateTime<FixedOffset>> {
    let field = |range: std::ops::Range<usize>| -> Result<i32> {
        offset[range]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid offset '{offset}'")))
    };
    let seconds = field(1..3)? * 3600 + field(4..6)? * 60 + field(7..9)?;
    let seconds = if offset.starts_with('-') {
        -seconds
    } else {
        seconds
    };
    let offset = FixedOffset::east_opt(seconds)
        .ok_or_else(|| TimeError::Parse(format!("offset '{offset}' out of range")))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TimeError::Parse(format!("'{naive}' unrepresentable at {offset}")))
}

/// Anchor a wall-clock reading in a zone. Ambiguous or nonexistent local
/// times (DST transitions) fail closed.
pub(crate) fn anchor_in_zone(naive: NaiveDateTime, zone: Tz) -> Result<DateTime<FixedOffset>> {
    zone.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| {
            TimeError::Parse(format!("'{naive}' is ambiguous or nonexistent in {zone}"))
        })
}
