//! Schedule construction from a specification string.

use chrono::TimeDelta;
use chrono_tz::Tz;
use openhours_core::constants::{ALWAYS_OPEN_SPEC, RULE_SEPARATOR};

use super::{Schedule, merge};
use crate::error::ScheduleResult;
use crate::grammar::{
    Diagnostics, ParseError, ParseErrorKind, TimeRange, expand_days, expand_time_field,
    normalize,
};
use crate::model::{WeekInstant, Window};
use crate::timezone::resolve_timezone;

impl<R> Schedule<R> {
    /// ## Summary
    /// Builds a schedule from a specification such as
    /// `mo-fr 08:00-18:00,19:00-21:00;su 10:00-12:00`.
    ///
    /// An empty specification means open every day, all day. Malformed
    /// tokens are dropped rather than rejected; see
    /// [`Schedule::build_with_diagnostics`] to inspect them.
    #[must_use]
    pub fn build(spec: &str, zone: R) -> Self {
        Self::build_with_diagnostics(spec, zone).0
    }

    /// ## Summary
    /// Builds a schedule and reports every token that was dropped or zeroed.
    #[tracing::instrument(skip(spec, zone), fields(spec_len = spec.len()))]
    pub fn build_with_diagnostics(spec: &str, zone: R) -> (Self, Diagnostics) {
        let mut diagnostics = Diagnostics::default();
        let windows = collect_windows(spec, &mut diagnostics);
        let boundaries = merge(windows);

        tracing::debug!(
            windows = boundaries.len() / 2,
            dropped = diagnostics.len(),
            "Schedule built"
        );

        (Self { boundaries, zone }, diagnostics)
    }
}

impl Schedule<Tz> {
    /// ## Summary
    /// Builds a schedule expressed in the timezone named `tzid`.
    ///
    /// ## Errors
    /// Returns `ScheduleError::UnknownTimezone` if `tzid` cannot be resolved.
    pub fn parse(spec: &str, tzid: &str) -> ScheduleResult<Self> {
        Ok(Self::build(spec, resolve_timezone(tzid)?))
    }
}

/// Specification actually parsed: one trailing separator is ignored and an
/// input without any rule text falls back to the always-open default.
fn effective_spec(normalized: &str) -> &str {
    let trimmed = normalized
        .strip_suffix(RULE_SEPARATOR)
        .unwrap_or(normalized);

    if trimmed
        .split(RULE_SEPARATOR)
        .all(|rule| rule.trim().is_empty())
    {
        ALWAYS_OPEN_SPEC
    } else {
        trimmed
    }
}

fn collect_windows(spec: &str, diagnostics: &mut Diagnostics) -> Vec<Window> {
    let normalized = normalize(spec);
    let mut windows = Vec::new();

    for (index, rule) in effective_spec(&normalized)
        .split(RULE_SEPARATOR)
        .enumerate()
    {
        let rule = rule.trim();
        if rule.is_empty() {
            continue;
        }
        diagnostics.enter_rule(index + 1);

        let fields: Vec<&str> = rule.split_whitespace().collect();
        let &[day_field, time_field] = fields.as_slice() else {
            diagnostics.record(ParseError::new(ParseErrorKind::MalformedRule, rule));
            continue;
        };

        let days = expand_days(day_field, diagnostics);
        for range in expand_time_field(time_field, diagnostics) {
            let Some(length) = range_length(range) else {
                diagnostics.record(ParseError::new(
                    ParseErrorKind::EmptyTimeRange,
                    format!("{}-{}", range.from, range.to),
                ));
                continue;
            };
            for day in &days {
                windows.extend(Window::spanning(
                    WeekInstant::from_parts(*day, range.from),
                    length,
                ));
            }
        }
    }

    windows
}

/// Length of a range, running past midnight when it ends before it starts.
/// `None` for a range that opens and closes at the same moment.
fn range_length(range: TimeRange) -> Option<TimeDelta> {
    let mut length = range.to.as_delta() - range.from.as_delta();
    if length < TimeDelta::zero() {
        length += TimeDelta::days(1);
    }
    (!length.is_zero()).then_some(length)
}
