//! Grammar tokens and defaults shared across crates.

/// Separates independent rules (`mo 08:00-12:00;sa 10:00-12:00`).
pub const RULE_SEPARATOR: char = ';';
/// Separates items inside a day field or a time field.
pub const LIST_SEPARATOR: char = ',';
/// Separates the two ends of a day range or a time range.
pub const RANGE_SEPARATOR: char = '-';
/// Separates hour, minute and second inside a time token.
pub const TIME_SEPARATOR: char = ':';

pub const FIRST_DAY_TOKEN: &str = "su";
pub const LAST_DAY_TOKEN: &str = "sa";
pub const START_OF_DAY_TOKEN: &str = "00:00";
pub const END_OF_DAY_TOKEN: &str = "24:00";

/// Specification substituted for an empty input: open every day, all day.
pub const ALWAYS_OPEN_SPEC: &str = const_str::concat!(
    FIRST_DAY_TOKEN,
    "-",
    LAST_DAY_TOKEN,
    " ",
    START_OF_DAY_TOKEN,
    "-",
    END_OF_DAY_TOKEN
);

pub const DEFAULT_TIMEZONE: &str = "UTC";

pub const DAYS_PER_WEEK: u8 = 7;
