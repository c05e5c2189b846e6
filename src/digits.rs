//! Digit-level utilities shared by the checksum and conversion layers

use crate::error::{IsbnError, Result};

/// The EAN namespace prefix for book-industry products
pub const BOOKLAND_PREFIX: &str = "978";

/// Remove a leading "978" if present; anything else is returned unchanged.
///
/// The match is anchored at the start of the string: a "978" appearing
/// mid-code is part of the data digits and must survive.
pub fn strip_bookland_prefix(code: &str) -> &str {
    code.strip_prefix(BOOKLAND_PREFIX).unwrap_or(code)
}

/// Return the first `n` characters of `code`.
pub fn truncate_to(code: &str, n: usize) -> Result<&str> {
    code.get(..n).ok_or(IsbnError::Length {
        expected: n,
        actual: code.chars().count(),
    })
}

/// Parse a single decimal character to its numeric value.
pub fn digit_value(ch: char) -> Result<u32> {
    ch.to_digit(10).ok_or(IsbnError::Digit { ch })
}

/// Parse an ISBN-10 check-digit character: a decimal digit, or `X` for 10.
///
/// `X` is numeric only in this position. Everywhere else it is rejected
/// like any other non-digit.
pub fn check_digit_value(ch: char) -> Result<u32> {
    match ch {
        'X' => Ok(10),
        _ => digit_value(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_anchored() {
        assert_eq!(strip_bookland_prefix("9781595828057"), "1595828057");
        assert_eq!(strip_bookland_prefix("1978000000"), "1978000000");
        assert_eq!(strip_bookland_prefix("0843610727"), "0843610727");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to("9781600108853", 3).unwrap(), "978");
        assert!(matches!(
            truncate_to("978", 10),
            Err(IsbnError::Length { expected: 10, actual: 3 })
        ));
    }

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_value('0').unwrap(), 0);
        assert_eq!(digit_value('9').unwrap(), 9);
        assert!(digit_value('X').is_err());
        assert_eq!(check_digit_value('X').unwrap(), 10);
        assert_eq!(check_digit_value('7').unwrap(), 7);
        assert!(check_digit_value('x').is_err());
    }
}
