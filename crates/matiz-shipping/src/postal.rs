//! Postal code value type.
//!
//! Raw checkout input is parsed into [`PostalCode`] at the boundary, so the
//! matcher only ever sees a well-formed fixed-width digit string. Anything
//! that does not normalize to exactly five digits is invalid input, and the
//! caller degrades to the fallback quote.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of a Mexican postal code (CP), in digits.
pub const POSTAL_CODE_WIDTH: usize = 5;

/// A normalized five-digit postal code.
///
/// Because the width is fixed, lexicographic comparison of the inner
/// string equals numeric comparison, which is what range matching
/// relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse raw user input into a postal code.
    ///
    /// All non-digit characters are stripped first, so `"CP 03100 "`
    /// normalizes to `"03100"`. Returns `None` when the remaining digit
    /// count is not exactly [`POSTAL_CODE_WIDTH`]; garbled or empty input
    /// never panics.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != POSTAL_CODE_WIDTH {
            return None;
        }
        Some(Self(digits))
    }

    /// Get the normalized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
