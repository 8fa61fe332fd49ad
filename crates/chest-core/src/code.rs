//! Code parsing and the secret sequence.
//!
//! Converts raw submitted text into an ordered sequence of integers, or
//! reports why it cannot. Parsing is a pure function of its input and the
//! required arity; the same input always yields the same result.

use crate::error::FormatError;

/// The fixed, ordered sequence of integers a submission must match.
///
/// Length is fixed at construction. A parsed submission is only compared
/// when its length equals the secret's, which the arity check in [`parse`]
/// guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode(Vec<i64>);

impl SecretCode {
    /// Create a secret from the given values.
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// Number of values a submission must contain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element-wise, order-sensitive comparison against a parsed submission.
    #[must_use]
    pub fn matches(&self, candidate: &[i64]) -> bool {
        self.0 == candidate
    }
}

/// Parse raw text into exactly `expected` signed integers.
///
/// Surrounding whitespace is trimmed and commas count as whitespace, so
/// `"2,7,1,9"` and `" 2 7 1 9 "` both split into four tokens. Runs of
/// adjacent separators produce no empty tokens. Token order is preserved
/// for the later comparison.
///
/// # Errors
///
/// - [`FormatError::WrongCount`] if the token count differs from `expected`
/// - [`FormatError::NotANumber`] on the first token that is not an optional
///   leading `-` followed by decimal digits, or that overflows `i64`
pub fn parse(raw: &str, expected: usize) -> Result<Vec<i64>, FormatError> {
    let tokens: Vec<&str> = raw
        .trim()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != expected {
        return Err(FormatError::WrongCount { expected });
    }

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let digits = token.strip_prefix('-').unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::NotANumber);
        }
        let value = token.parse::<i64>().map_err(|_| FormatError::NotANumber)?;
        values.push(value);
    }

    Ok(values)
}
