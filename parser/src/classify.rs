use crate::NumberError;

/// Returns true if the input is non-empty and consists of ASCII digits only.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the input is non-empty and consists of `[0-9A-Za-z-]` only.
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Returns true if the input starts with a `0` that is not the only character.
pub fn has_leading_zero(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0')
}

/// Parses a version number: ASCII digits only, no leading zero, fits into an u64.
///
/// ## Examples
///
/// ```rust
/// # use strict_semver_parser::{parse_numeric, NumberError};
/// assert_eq!(parse_numeric("0"), Ok(0));
/// assert_eq!(parse_numeric("42"), Ok(42));
/// assert_eq!(parse_numeric(""), Err(NumberError::Empty));
/// assert_eq!(parse_numeric("+1"), Err(NumberError::NotANumber));
/// assert_eq!(parse_numeric("042"), Err(NumberError::LeadingZero));
/// assert_eq!(parse_numeric("18446744073709551616"), Err(NumberError::Overflow));
/// ```
pub fn parse_numeric(s: &str) -> Result<u64, NumberError> {
    if s.is_empty() {
        Err(NumberError::Empty)
    } else if !is_numeric(s) {
        Err(NumberError::NotANumber)
    } else if has_leading_zero(s) {
        Err(NumberError::LeadingZero)
    } else {
        // only digits are left, so the only possible failure is an overflow
        s.parse::<u64>().map_err(|_| NumberError::Overflow)
    }
}
