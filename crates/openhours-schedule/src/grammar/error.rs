//! Grammar diagnostics.

use std::fmt;

/// Result type for token decoding.
pub type ParseResult<T> = Result<T, ParseError>;

/// A token that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The offending token, as seen after normalization.
    pub token: String,
    /// Rule the token belongs to (1-based), when known.
    pub rule: Option<usize>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
            rule: None,
        }
    }

    /// Attaches the rule number.
    #[must_use]
    pub const fn with_rule(mut self, rule: usize) -> Self {
        self.rule = Some(rule);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rule) = self.rule {
            write!(f, "rule {rule}: ")?;
        }
        write!(f, "{}: `{}`", self.kind, self.token)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Rule does not split into exactly a day field and a time field.
    MalformedRule,
    /// Day item is neither `dd` nor `dd-dd`.
    MalformedDayItem,
    /// Two-letter token is not a known weekday.
    UnknownWeekday,
    /// Time range is not `TIME-TIME`.
    MalformedTimeRange,
    /// Time token does not have two or three numeric fields.
    MalformedTime,
    /// Time token has a field out of range.
    TimeOutOfRange,
    /// Time range opens and closes at the same moment.
    EmptyTimeRange,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRule => write!(f, "malformed rule"),
            Self::MalformedDayItem => write!(f, "malformed day item"),
            Self::UnknownWeekday => write!(f, "unknown weekday"),
            Self::MalformedTimeRange => write!(f, "malformed time range"),
            Self::MalformedTime => write!(f, "malformed time"),
            Self::TimeOutOfRange => write!(f, "time out of range"),
            Self::EmptyTimeRange => write!(f, "empty time range"),
        }
    }
}

/// Collects tokens dropped or zeroed while building a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
    rule: Option<usize>,
}

impl Diagnostics {
    /// Tags subsequently recorded errors with `rule` (1-based).
    pub fn enter_rule(&mut self, rule: usize) {
        self.rule = Some(rule);
    }

    /// Records an error, tagging it with the current rule.
    pub fn record(&mut self, error: ParseError) {
        let error = match (error.rule, self.rule) {
            (None, Some(rule)) => error.with_rule(rule),
            _ => error,
        };
        tracing::debug!(
            kind = %error.kind,
            token = %error.token,
            rule = ?error.rule,
            "Ignoring malformed token"
        );
        self.errors.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.errors.iter()
    }

    /// Returns `true` if any recorded error has the given kind.
    #[must_use]
    pub fn contains(&self, kind: ParseErrorKind) -> bool {
        self.errors.iter().any(|error| error.kind == kind)
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
