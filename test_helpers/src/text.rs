//! Scalar parsing for behavioural step placeholders.
//!
//! Feature files spell payloads as bare integers (`42`) or quoted text
//! (`"bad input"`). Steps parse them into a [`Scalar`] so one step definition
//! covers both shapes.

use std::fmt;

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// A placeholder value taken from a feature file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// An unquoted value that parses as an integer.
    Int(i64),
    /// Anything else, with one layer of quotes removed.
    Text(String),
}

impl Scalar {
    /// Parses `value`; quoted values always stay text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let unquoted = unquote(trimmed);
        if unquoted.len() == trimmed.len() {
            if let Ok(number) = trimmed.parse::<i64>() {
                return Self::Int(number);
            }
        }
        Self::Text(unquoted.to_owned())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
