//! Format-specific conversions and the scanned-code dispatcher
//!
//! Scanned book codes arrive in several widths: bare 10- and 13-digit
//! ISBNs, 14-character codes carrying an ISBN-10 plus price/currency
//! digits, 18-character codes carrying an EAN-13 plus an EAN-5 price
//! supplement, and 17-character UPC scans that only a product catalog can
//! resolve. Everything funnels into the canonical 13-digit form; price
//! supplements are dropped on the way, deliberately and irreversibly.

use tracing::{debug, warn};

use crate::catalog::UpcResolver;
use crate::checksum::isbn13_check_digit;
use crate::digits::{strip_bookland_prefix, truncate_to, BOOKLAND_PREFIX};
use crate::error::{IsbnError, Result};
use crate::isbn::Isbn13;

/// Outcome of dispatching a scanned code.
///
/// "Cannot convert" is a normal result here, not an error: callers
/// pattern-match instead of unwrapping.
#[derive(Debug)]
pub enum Conversion {
    /// The canonical 13-digit form
    Converted(Isbn13),
    /// A recognized-but-unconvertible width (bare 10-digit codes) or an
    /// unknown one
    Unsupported { length: usize },
    /// A hard failure: violated precondition or unresolvable UPC
    Failed(IsbnError),
}

impl Conversion {
    /// The converted value, if there is one.
    pub fn isbn(self) -> Option<Isbn13> {
        match self {
            Conversion::Converted(isbn) => Some(isbn),
            _ => None,
        }
    }

    /// Whether dispatch produced a canonical form.
    pub fn is_converted(&self) -> bool {
        matches!(self, Conversion::Converted(_))
    }
}

/// Convert a 10-character ISBN to the canonical 13-digit form.
///
/// Prefixes "978" to the nine data digits and appends a freshly computed
/// mod-10 check digit. The original mod-11 check character (possibly `X`)
/// is discarded; the two algorithms differ, so this is one-way.
pub fn isbn10_to_isbn13(code: &str) -> Result<Isbn13> {
    let len = code.chars().count();
    if len != 10 {
        return Err(IsbnError::Length {
            expected: 10,
            actual: len,
        });
    }

    let mut canonical = String::with_capacity(13);
    canonical.push_str(BOOKLAND_PREFIX);
    canonical.push_str(truncate_to(code, 9)?);
    let check = isbn13_check_digit(&canonical)?;
    canonical.push(check);
    Isbn13::parse(&canonical)
}

/// Convert a 14-character scan (ISBN-10 plus four price/currency digits).
///
/// The input must not already carry the Bookland prefix. The trailing four
/// characters are dropped without record.
pub fn priced_isbn10_to_isbn13(code: &str) -> Result<Isbn13> {
    if code.starts_with(BOOKLAND_PREFIX) {
        return Err(IsbnError::UnexpectedPrefix {
            code: code.to_string(),
        });
    }
    isbn10_to_isbn13(truncate_to(code, 10)?)
}

/// Convert an 18-character scan (EAN-13 plus an EAN-5 price supplement).
///
/// The input must carry the Bookland prefix. The first 13 characters are
/// taken verbatim; the supplement is dropped without record.
pub fn priced_ean_to_isbn13(code: &str) -> Result<Isbn13> {
    if !code.starts_with(BOOKLAND_PREFIX) {
        return Err(IsbnError::MissingPrefix {
            code: code.to_string(),
        });
    }
    Isbn13::parse(truncate_to(code, 13)?)
}

/// Best-effort cleanup of a raw scanner read.
///
/// Absent or empty input yields `None`; otherwise the Bookland prefix is
/// prepended unless already present and the first 13 characters are kept.
/// Anything that cannot form 13 decimal digits yields `None` rather than a
/// malformed value. No checksum is computed or verified here; use
/// [`normalize`] for the strict path.
pub fn scanned_to_isbn13(scanned: Option<&str>) -> Option<Isbn13> {
    let scanned = scanned?;
    if scanned.is_empty() {
        return None;
    }

    let prefixed = format!("{BOOKLAND_PREFIX}{}", strip_bookland_prefix(scanned));

    match truncate_to(&prefixed, 13).and_then(Isbn13::parse) {
        Ok(isbn) => Some(isbn),
        Err(e) => {
            debug!(scanned, error = %e, "scan could not form a 13-digit code");
            None
        }
    }
}

/// Normalize a scanned code to the canonical 13-digit form, dispatching on
/// character length.
///
/// Embedded newlines are stripped before the length is measured. Checksum
/// verification along the way is advisory: a mismatch is logged and the
/// value returned anyway. Only violated preconditions (wrong prefix
/// presence, wrong width for a sub-conversion) and failed UPC resolution
/// surface as [`Conversion::Failed`].
///
/// | length | action |
/// |--------|--------|
/// | 10     | unsupported, by long-standing limitation |
/// | 13     | advisory verify, pass through unchanged |
/// | 14     | drop price digits, convert via the 10-digit form |
/// | 17     | resolve the leading 12 (UPC-A) through the catalog |
/// | 18     | drop the EAN-5 supplement, keep the EAN-13 |
/// | other  | unsupported |
pub fn normalize(input: &str, resolver: &dyn UpcResolver) -> Conversion {
    let code: String = input.chars().filter(|&ch| ch != '\n').collect();
    let length = code.chars().count();
    debug!(length, "dispatching scanned code");

    match length {
        10 => {
            debug!(code = %code, "bare 10-digit codes are not converted");
            Conversion::Unsupported { length }
        }
        13 => verified(Isbn13::parse(&code)),
        14 => verified(priced_isbn10_to_isbn13(&code)),
        17 => match resolve_via_catalog(&code, resolver) {
            Ok(isbn) => Conversion::Converted(isbn),
            Err(e) => Conversion::Failed(e),
        },
        18 => verified(priced_ean_to_isbn13(&code)),
        _ => {
            warn!(length, code = %code, "unknown code length");
            Conversion::Unsupported { length }
        }
    }
}

/// Advisory checksum check on a conversion result. Never alters the value.
fn verified(result: Result<Isbn13>) -> Conversion {
    match result {
        Ok(isbn) => {
            if !isbn.is_valid() {
                warn!(isbn = %isbn, "check digit mismatch, passing code through");
            }
            Conversion::Converted(isbn)
        }
        Err(e) => Conversion::Failed(e),
    }
}

/// Resolve a 17-character UPC scan through the catalog collaborator.
///
/// Only the leading 12 characters (the UPC-A portion) reach the resolver;
/// the EAN-5 supplement is dropped like every other price supplement.
/// Superseded records are filtered out and surviving ISBNs de-duplicated
/// before the exactly-one check.
fn resolve_via_catalog(code: &str, resolver: &dyn UpcResolver) -> Result<Isbn13> {
    let upc = truncate_to(code, 12)?;
    let records = resolver.resolve_upc(upc);

    let mut isbns: Vec<&str> = records
        .iter()
        .filter(|r| !r.superseded)
        .map(|r| r.isbn_number.as_str())
        .collect();
    isbns.sort_unstable();
    isbns.dedup();

    match isbns.as_slice() {
        [] => Err(IsbnError::UpcNotFound {
            upc: upc.to_string(),
        }),
        [isbn] => catalog_isbn_to_13(isbn),
        many => Err(IsbnError::UpcAmbiguous {
            upc: upc.to_string(),
            matches: many.len(),
        }),
    }
}

/// Catalogs hold either form; bring the survivor to 13 digits.
fn catalog_isbn_to_13(isbn: &str) -> Result<Isbn13> {
    match isbn.chars().count() {
        10 => isbn10_to_isbn13(isbn),
        _ => Isbn13::parse(isbn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NoCatalog, ProductRecord};
    use crate::checksum::isbn13_verify;

    /// Canned catalog for dispatcher tests.
    struct StubCatalog(Vec<ProductRecord>);

    impl UpcResolver for StubCatalog {
        fn resolve_upc(&self, upc: &str) -> Vec<ProductRecord> {
            self.0.iter().filter(|r| r.upc == upc).cloned().collect()
        }
    }

    fn record(upc: &str, isbn: &str, superseded: bool) -> ProductRecord {
        ProductRecord {
            upc: upc.to_string(),
            isbn_number: isbn.to_string(),
            superseded,
        }
    }

    #[test]
    fn test_isbn10_to_isbn13() {
        let isbn = isbn10_to_isbn13("0843610727").unwrap();
        assert_eq!(isbn.as_str(), "9780843610727");
        assert!(isbn13_verify(isbn.as_str()));
    }

    #[test]
    fn test_isbn10_to_isbn13_drops_x() {
        let isbn = isbn10_to_isbn13("080442957X").unwrap();
        assert_eq!(isbn.as_str(), "9780804429573");
        assert!(isbn.is_valid());
    }

    #[test]
    fn test_isbn10_to_isbn13_wrong_length() {
        assert!(matches!(
            isbn10_to_isbn13("084361072"),
            Err(IsbnError::Length { expected: 10, actual: 9 })
        ));
        assert!(isbn10_to_isbn13("08436107271").is_err());
    }

    #[test]
    fn test_priced_isbn10() {
        let isbn = priced_isbn10_to_isbn13("08436107275099").unwrap();
        assert_eq!(isbn.as_str(), "9780843610727");
        // the price digits are gone
        assert!(!isbn.as_str().contains("5099"));
    }

    #[test]
    fn test_priced_isbn10_rejects_prefixed_input() {
        assert!(matches!(
            priced_isbn10_to_isbn13("97804361072709"),
            Err(IsbnError::UnexpectedPrefix { .. })
        ));
    }

    #[test]
    fn test_priced_ean() {
        let isbn = priced_ean_to_isbn13("978160010885301999").unwrap();
        assert_eq!(isbn.as_str(), "9781600108853");
    }

    #[test]
    fn test_priced_ean_requires_prefix() {
        assert!(matches!(
            priced_ean_to_isbn13("123456789012301999"),
            Err(IsbnError::MissingPrefix { .. })
        ));
    }

    #[test]
    fn test_scanned_cleanup() {
        assert_eq!(scanned_to_isbn13(None), None);
        assert_eq!(scanned_to_isbn13(Some("")), None);
        assert_eq!(scanned_to_isbn13(Some("12")), None);

        let isbn = scanned_to_isbn13(Some("0843610727")).unwrap();
        assert_eq!(isbn.as_str(), "9780843610727");

        // already prefixed: truncate only
        let isbn = scanned_to_isbn13(Some("978160010885301999")).unwrap();
        assert_eq!(isbn.as_str(), "9781600108853");
    }

    #[test]
    fn test_normalize_13_is_idempotent() {
        let out = normalize("9781595828057", &NoCatalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9781595828057");
    }

    #[test]
    fn test_normalize_13_bad_checksum_passes_through() {
        // verification is advisory; the code still comes back unchanged
        let out = normalize("9781595828097", &NoCatalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9781595828097");
    }

    #[test]
    fn test_normalize_strips_newlines() {
        let out = normalize("9781595828057\n", &NoCatalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9781595828057");
    }

    #[test]
    fn test_normalize_10_is_unsupported() {
        assert!(matches!(
            normalize("0843610727", &NoCatalog),
            Conversion::Unsupported { length: 10 }
        ));
    }

    #[test]
    fn test_normalize_unknown_length() {
        assert!(matches!(
            normalize("1234567", &NoCatalog),
            Conversion::Unsupported { length: 7 }
        ));
    }

    #[test]
    fn test_normalize_18() {
        let out = normalize("978160010885301999", &NoCatalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9781600108853");
    }

    #[test]
    fn test_normalize_14() {
        let out = normalize("08436107275099", &NoCatalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9780843610727");
    }

    #[test]
    fn test_normalize_14_prefix_violation_is_fatal() {
        assert!(matches!(
            normalize("97815958280579", &NoCatalog),
            Conversion::Failed(IsbnError::UnexpectedPrefix { .. })
        ));
    }

    #[test]
    fn test_normalize_17_resolves_through_catalog() {
        let catalog = StubCatalog(vec![
            record("073999094718", "9781595828057", false),
            // duplicates and superseded rows must not make it ambiguous
            record("073999094718", "9781595828057", false),
            record("073999094718", "0000000000", true),
        ]);
        let out = normalize("07399909471801999", &catalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9781595828057");
    }

    #[test]
    fn test_normalize_17_converts_10_digit_catalog_isbn() {
        let catalog = StubCatalog(vec![record("073999094718", "0843610727", false)]);
        let out = normalize("07399909471801999", &catalog).isbn().unwrap();
        assert_eq!(out.as_str(), "9780843610727");
    }

    #[test]
    fn test_normalize_17_not_found() {
        assert!(matches!(
            normalize("07399909471801999", &NoCatalog),
            Conversion::Failed(IsbnError::UpcNotFound { .. })
        ));
    }

    #[test]
    fn test_normalize_17_ambiguous() {
        let catalog = StubCatalog(vec![
            record("073999094718", "9781595828057", false),
            record("073999094718", "9780843610727", false),
        ]);
        assert!(matches!(
            normalize("07399909471801999", &catalog),
            Conversion::Failed(IsbnError::UpcAmbiguous { matches: 2, .. })
        ));
    }
}
