//! ISBN value types
//!
//! Immutable newtypes over validated digit strings. Construction checks
//! shape (length and digit-ness) only; checksum correctness is a separate
//! query so that permissive pipelines can carry a syntactically well-formed
//! code whose check digit is wrong.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::checksum;
use crate::digits::{check_digit_value, digit_value};
use crate::error::{IsbnError, Result};

/// A 10-character ISBN: nine data digits plus a mod-11 check character.
///
/// The final character may be the literal symbol `X`, standing for the
/// check value 10.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Isbn10(String);

impl Isbn10 {
    /// Parse a 10-character code, validating shape only.
    pub fn parse(code: &str) -> Result<Self> {
        let len = code.chars().count();
        if len != 10 {
            return Err(IsbnError::Length {
                expected: 10,
                actual: len,
            });
        }
        for ch in code.chars().take(9) {
            digit_value(ch)?;
        }
        if let Some(last) = code.chars().nth(9) {
            check_digit_value(last)?;
        }
        Ok(Self(code.to_string()))
    }

    /// The underlying 10-character string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check character as written (not recomputed).
    pub fn check_char(&self) -> char {
        self.0.chars().nth(9).unwrap_or('0')
    }

    /// Whether the written check character matches the mod-11 computation.
    pub fn is_valid(&self) -> bool {
        checksum::isbn10_verify(&self.0)
    }

    /// Convert to the canonical 13-digit form.
    ///
    /// The mod-11 check character is dropped and a mod-10 check digit is
    /// computed fresh; the conversion is one-way.
    pub fn to_isbn13(&self) -> Result<Isbn13> {
        crate::convert::isbn10_to_isbn13(&self.0)
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical 13-digit ISBN.
///
/// Exactly 13 decimal digits; `X` is never valid in this form. The leading
/// three digits are the EAN "Bookland" prefix for book-industry products,
/// though construction does not insist on it (see
/// [`Isbn13::has_bookland_prefix`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Isbn13(String);

impl Isbn13 {
    /// Parse a 13-character code, validating shape only.
    pub fn parse(code: &str) -> Result<Self> {
        let len = code.chars().count();
        if len != 13 {
            return Err(IsbnError::Length {
                expected: 13,
                actual: len,
            });
        }
        for ch in code.chars() {
            digit_value(ch)?;
        }
        Ok(Self(code.to_string()))
    }

    /// The underlying 13-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading three-digit EAN prefix.
    pub fn prefix(&self) -> &str {
        &self.0[..3]
    }

    /// Whether the prefix is one of the Bookland namespaces (978/979).
    pub fn has_bookland_prefix(&self) -> bool {
        matches!(self.prefix(), "978" | "979")
    }

    /// The check digit as written (not recomputed).
    pub fn check_char(&self) -> char {
        self.0.chars().nth(12).unwrap_or('0')
    }

    /// Whether the written check digit matches the mod-10 computation.
    pub fn is_valid(&self) -> bool {
        checksum::isbn13_verify(&self.0)
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Isbn13> for String {
    fn from(isbn: Isbn13) -> Self {
        isbn.0
    }
}
