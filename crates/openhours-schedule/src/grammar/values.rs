//! Atomic token decoders.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::model::{TimeOfDay, Weekday};
use openhours_core::constants::TIME_SEPARATOR;

/// Decodes an exact two-letter weekday abbreviation (`su` … `sa`).
///
/// Unknown tokens yield `None`; lookup is case sensitive, so tokens are
/// expected to be normalized first.
#[must_use]
pub fn decode_weekday(token: &str) -> Option<Weekday> {
    Weekday::from_token(token)
}

/// Decodes a time token of the form `HH:MM` or `HH:MM:SS`.
///
/// Each field must be made of ASCII digits only. The result must lie in
/// `00:00:00 ..= 24:00:00`.
///
/// ## Errors
/// Returns [`ParseErrorKind::MalformedTime`] when the token does not have two
/// or three numeric fields and [`ParseErrorKind::TimeOutOfRange`] when a field
/// is out of range.
pub fn decode_time_of_day(token: &str) -> ParseResult<TimeOfDay> {
    let fields = token
        .split(TIME_SEPARATOR)
        .map(parse_field)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedTime, token))?;

    let (hour, minute, second) = match fields.as_slice() {
        [hour, minute] => (*hour, *minute, 0),
        [hour, minute, second] => (*hour, *minute, *second),
        _ => return Err(ParseError::new(ParseErrorKind::MalformedTime, token)),
    };

    TimeOfDay::new(hour, minute, second)
        .ok_or_else(|| ParseError::new(ParseErrorKind::TimeOutOfRange, token))
}

/// Parses one numeric field. Fields too large for a `u8` are clamped so they
/// are reported as out of range rather than malformed.
fn parse_field(field: &str) -> Option<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(field.parse::<u8>().unwrap_or(u8::MAX))
}
