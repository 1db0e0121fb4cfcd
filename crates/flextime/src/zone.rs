//! Process-wide timezone state.
//!
//! Naive (offset-less) inputs are anchored in a zone. Callers that want an
//! explicit zone thread one through [`TimeParser`](crate::TimeParser); the
//! functions here back the module-level entry points that default to the
//! process-wide setting.
//!
//! The global is last-writer-wins: a single assignment under the write lock,
//! so concurrent readers see either the old or the new zone, never a torn
//! value.

use std::sync::{PoisonError, RwLock};

use chrono_tz::Tz;

use crate::error::{Result, TimeError};

static PROCESS_ZONE: RwLock<Tz> = RwLock::new(Tz::UTC);

/// Parse an IANA timezone name into `Tz`.
pub(crate) fn resolve_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::Zone(format!("'{name}'")))
}

/// Set the process-wide timezone by IANA name (e.g. `"Asia/Shanghai"`).
///
/// Subsequent parses of naive inputs through the module-level entry points
/// are anchored in this zone.
///
/// # Errors
///
/// Returns [`TimeError::Zone`] if the name is not a recognized IANA zone.
pub fn set_timezone(name: &str) -> Result<()> {
    let tz = resolve_zone(name)?;
    log::debug!("process timezone set to {tz}");
    *PROCESS_ZONE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = tz;
    Ok(())
}

/// The current process-wide timezone. Defaults to UTC.
pub fn timezone() -> Tz {
    *PROCESS_ZONE.read().unwrap_or_else(PoisonError::into_inner)
}
