//! Expansion of day fields and time fields.

use std::collections::BTreeSet;

use openhours_core::constants::{DAYS_PER_WEEK, LIST_SEPARATOR, RANGE_SEPARATOR};

use super::error::{Diagnostics, ParseError, ParseErrorKind, ParseResult};
use super::values::{decode_time_of_day, decode_weekday};
use crate::model::{TimeOfDay, Weekday};

/// A decoded `TIME-TIME` pair.
///
/// No ordering is implied: `to` may precede `from` for ranges running past
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: TimeOfDay,
    pub to: TimeOfDay,
}

/// ## Summary
/// Expands a comma-separated day field into the set of weekdays it covers,
/// sorted from Sunday to Saturday without duplicates.
///
/// Each item is a single day (`mo`) or a range (`mo-fr`). A range whose end
/// comes before its start wraps across the end of the week, so `fr-mo`
/// covers Friday through Monday. Items that do not decode are recorded in
/// `diagnostics` and skipped.
pub fn expand_days(token: &str, diagnostics: &mut Diagnostics) -> Vec<Weekday> {
    let mut days = BTreeSet::new();
    for item in token.split(LIST_SEPARATOR) {
        match expand_day_item(item) {
            Ok(covered) => days.extend(covered),
            Err(error) => diagnostics.record(error),
        }
    }
    days.into_iter().collect()
}

fn expand_day_item(item: &str) -> ParseResult<Vec<Weekday>> {
    match item.len() {
        2 => decode_weekday(item)
            .map(|day| vec![day])
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownWeekday, item)),
        5 => {
            let (from, to) = item
                .split_once(RANGE_SEPARATOR)
                .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedDayItem, item))?;
            let unknown = || ParseError::new(ParseErrorKind::UnknownWeekday, item);
            let from = decode_weekday(from).ok_or_else(unknown)?;
            let to = decode_weekday(to).ok_or_else(unknown)?;

            let mut end = to.index();
            if end < from.index() {
                end += DAYS_PER_WEEK;
            }
            Ok((from.index()..=end).map(Weekday::from_index).collect())
        }
        _ => Err(ParseError::new(ParseErrorKind::MalformedDayItem, item)),
    }
}

/// ## Summary
/// Expands a single `TIME-TIME` range.
///
/// Both ends are decoded independently. An end that fails to decode is
/// recorded in `diagnostics` and treated as `00:00`.
///
/// ## Errors
/// Returns [`ParseErrorKind::MalformedTimeRange`] when the token does not
/// consist of exactly two times separated by `-`.
pub fn expand_time_range(token: &str, diagnostics: &mut Diagnostics) -> ParseResult<TimeRange> {
    let mut ends = token.split(RANGE_SEPARATOR);
    let (Some(from), Some(to), None) = (ends.next(), ends.next(), ends.next()) else {
        return Err(ParseError::new(ParseErrorKind::MalformedTimeRange, token));
    };

    Ok(TimeRange {
        from: decode_or_midnight(from, diagnostics),
        to: decode_or_midnight(to, diagnostics),
    })
}

/// Expands a comma-separated time field. Ranges that are not `TIME-TIME`
/// are recorded in `diagnostics` and skipped.
pub fn expand_time_field(field: &str, diagnostics: &mut Diagnostics) -> Vec<TimeRange> {
    field
        .split(LIST_SEPARATOR)
        .filter_map(|token| {
            expand_time_range(token, diagnostics)
                .map_err(|error| diagnostics.record(error))
                .ok()
        })
        .collect()
}

fn decode_or_midnight(token: &str, diagnostics: &mut Diagnostics) -> TimeOfDay {
    decode_time_of_day(token).unwrap_or_else(|error| {
        diagnostics.record(error);
        TimeOfDay::MIDNIGHT
    })
}
