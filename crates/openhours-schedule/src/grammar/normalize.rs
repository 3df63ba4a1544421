//! Lexical cleanup of a raw specification.

/// ## Summary
/// Normalizes a raw specification: trims it, collapses whitespace runs
/// (spaces, tabs, newlines) to a single space, lowercases it and removes
/// spaces around commas.
///
/// Total: never fails, an empty input yields an empty string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace(" ,", ",")
        .replace(", ", ",")
}
