//! Clock readers.
//!
//! Thin reads of the wall clock at the granularities callers actually ask
//! for, plus rendered "now" conveniences and a closure cost timer. No
//! algorithmic content beyond unit conversion.

use std::time::{Duration, Instant};

use chrono::Utc;

use crate::time::{ParsedTime, DEFAULT_TEMPLATE};
use crate::zone;

/// Nanoseconds since the Unix epoch.
///
/// Saturates at `i64::MAX` for instants past the year 2262.
pub fn nanosecond() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}

/// Microseconds since the Unix epoch.
pub fn microsecond() -> i64 {
    Utc::now().timestamp_micros()
}

/// Milliseconds since the Unix epoch.
pub fn millisecond() -> i64 {
    Utc::now().timestamp_millis()
}

/// Seconds since the Unix epoch.
pub fn second() -> i64 {
    Utc::now().timestamp()
}

/// The current instant, expressed in the process-wide zone.
pub fn now() -> ParsedTime {
    ParsedTime::new(Utc::now().with_timezone(&zone::timezone()).fixed_offset())
}

/// Today's date in the process-wide zone, rendered `Y-m-d`.
pub fn date() -> String {
    now().format("Y-m-d")
}

/// The current date and time in the process-wide zone, rendered
/// `Y-m-d H:i:s`.
pub fn datetime() -> String {
    now().format(DEFAULT_TEMPLATE)
}

/// Wall-clock cost of running `f` once, on the monotonic clock.
pub fn func_cost<F: FnOnce()>(f: F) -> Duration {
    let started = Instant::now();
    f();
    started.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_nanosecond_rederives() {
        let nanos = nanosecond();
        let rederived = DateTime::<Utc>::from_timestamp_nanos(nanos);
        assert_eq!(rederived.timestamp_nanos_opt().unwrap(), nanos);
    }

    #[test]
    fn test_microsecond_rederives() {
        let micros = microsecond();
        let rederived = DateTime::<Utc>::from_timestamp_micros(micros).unwrap();
        assert_eq!(rederived.timestamp_micros(), micros);
    }

    #[test]
    fn test_millisecond_rederives() {
        let millis = millisecond();
        let rederived = DateTime::<Utc>::from_timestamp_millis(millis).unwrap();
        assert_eq!(rederived.timestamp_millis(), millis);
    }

    #[test]
    fn test_second_rederives() {
        let secs = second();
        let rederived = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
        assert_eq!(rederived.timestamp(), secs);
    }

    #[test]
    fn test_granularities_agree() {
        let (nanos, secs) = (nanosecond(), second());
        // Readings taken microseconds apart; allow one second of skew.
        assert!((nanos / 1_000_000_000 - secs).abs() <= 1);
    }

    // Shape-only assertions: the process zone may legitimately change under
    // a concurrently running test.
    #[test]
    fn test_date_shape() {
        let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(re.is_match(&date()), "got {}", date());
    }

    #[test]
    fn test_datetime_shape() {
        let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
        assert!(re.is_match(&datetime()), "got {}", datetime());
    }

    #[test]
    fn test_func_cost_measures_at_least_the_work() {
        let cost = func_cost(|| std::thread::sleep(Duration::from_millis(20)));
        assert!(cost >= Duration::from_millis(20));
    }
}
