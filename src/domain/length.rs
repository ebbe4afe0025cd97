// SPDX-License-Identifier: MPL-2.0
//! CSS length expressions.
//!
//! Lengths are interpolated verbatim into a `<style>` block, so the only
//! validation performed is that the value stays inside its declaration.
//! Whether the expression is meaningful CSS is left to the browser.

use std::fmt;

/// Characters that would end a declaration, a rule, or the style element.
const FORBIDDEN: [char; 6] = [';', '{', '}', '<', '>', '\\'];

/// Comment delimiters; an unclosed `/*` swallows every later rule.
const COMMENT_MARKERS: [&str; 2] = ["/*", "*/"];

/// Why a length expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthError {
    /// Config field the value came from.
    pub field: &'static str,
    /// The rejected value as given.
    pub value: String,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid length for `{}`: {:?}", self.field, self.value)
    }
}

impl std::error::Error for LengthError {}

/// A CSS length expression, guaranteed safe to place in a declaration.
///
/// Leading and trailing whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssLength(String);

impl CssLength {
    /// Validates `value` as the length for `field`.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, LengthError> {
        let trimmed = value.trim();
        let rejected = trimmed.is_empty()
            || trimmed
                .chars()
                .any(|c| c.is_control() || FORBIDDEN.contains(&c))
            || COMMENT_MARKERS.iter().any(|marker| trimmed.contains(marker))
            || has_open_string(trimmed);
        if rejected {
            return Err(LengthError {
                field,
                value: value.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validates `value`, falling back to `default` with a warning.
    ///
    /// `default` is trusted and not validated.
    pub fn parse_or(field: &'static str, value: &str, default: &'static str) -> Self {
        Self::parse(field, value).unwrap_or_else(|err| {
            tracing::warn!(field, value = %err.value, fallback = default, "invalid length, using default");
            Self(default.to_string())
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Backslashes are already rejected, so quotes cannot be escaped and an odd
/// count means a string literal is left open.
fn has_open_string(value: &str) -> bool {
    ['"', '\''].iter().any(|quote| value.matches(*quote).count() % 2 == 1)
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CssLength {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
