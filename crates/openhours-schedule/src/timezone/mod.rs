//! Timezone collaborator: UTC offset resolution and timezone lookup.
//!
//! Schedules only ever need one capability from a timezone: the UTC offset
//! in effect at a given instant. [`OffsetResolver`] is that capability, so
//! tests can substitute a [`TransitionTable`] with synthetic DST changes.

mod transition;

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{ScheduleError, ScheduleResult};

pub use transition::TransitionTable;

/// Resolves the UTC offset of a timezone at a given instant.
pub trait OffsetResolver {
    /// Returns the UTC offset in effect at `instant`.
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset;
}

impl OffsetResolver for Tz {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        self.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

impl OffsetResolver for FixedOffset {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        *self
    }
}

impl OffsetResolver for Utc {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        self.fix()
    }
}

/// ## Summary
/// Resolves the timezone a schedule is written in.
///
/// Exact IANA names are used as given. Anything else is looked up through
/// ICU4X, which understands IANA aliases (`Europe/Kiev`) and Windows zone
/// names (`W. Europe Standard Time`).
///
/// ## Errors
///
/// Returns `ScheduleError::UnknownTimezone` if the name cannot be resolved.
pub fn resolve_timezone(name: &str) -> ScheduleResult<Tz> {
    let name = name.trim();
    if let Ok(tz) = Tz::from_str(name) {
        return Ok(tz);
    }

    let canonical = canonical_name(name);
    canonical
        .as_deref()
        .and_then(|canonical| Tz::from_str(canonical).ok())
        .ok_or_else(|| {
            tracing::debug!(name, ?canonical, "Unknown timezone");
            ScheduleError::UnknownTimezone(name.to_string())
        })
}

/// Canonical IANA name for a Windows zone name or an IANA alias.
fn canonical_name(name: &str) -> Option<String> {
    let iana = IanaParserExtended::new();
    let zone = WindowsParser::new()
        .parse(name, None)
        .unwrap_or_else(|| iana.parse(name).time_zone);
    if zone == icu::time::TimeZone::UNKNOWN {
        return None;
    }

    iana.iter()
        .find(|entry| entry.time_zone == zone)
        .map(|entry| entry.canonical.to_string())
}
