//! Bookland ISBN Normalization
//!
//! Normalizes book identification numbers of varying lengths and encodings
//! into a single canonical 13-digit form, so codes from vendor catalogs,
//! barcode scanners, and external APIs compare equal.
//!
//! ## Features
//!
//! - **Two checksum algorithms**: mod-11 for ISBN-10 (with the `X` check
//!   symbol), mod-10 for ISBN-13
//! - **Format conversions**: 10→13, 14→13, and 18→13, dropping embedded
//!   price/currency supplements
//! - **Length dispatch**: one entry point that routes a raw scan by width
//!   and reports "cannot convert" as a normal outcome
//! - **Catalog boundary**: UPC scans resolve through a caller-supplied
//!   [`UpcResolver`]; the engine itself touches no storage
//! - **Advisory verification**: the dispatcher logs checksum mismatches via
//!   `tracing` and passes the code through; strict callers use the
//!   `*_verify` queries directly
//!
//! ## Pipeline
//!
//! ```text
//! scanned code ──> normalize() ──┬─ 13 chars ── advisory verify ──> Isbn13
//!                                ├─ 14 chars ── drop price, 10→13 ─> Isbn13
//!                                ├─ 17 chars ── UpcResolver ───────> Isbn13
//!                                ├─ 18 chars ── drop EAN-5 ────────> Isbn13
//!                                └─ 10/other ── Unsupported
//! ```

pub mod catalog;
pub mod checksum;
pub mod config;
pub mod convert;
pub mod digits;
pub mod error;
pub mod isbn;

pub use catalog::{JsonCatalog, NoCatalog, ProductRecord, UpcResolver};
pub use checksum::{isbn10_check_digit, isbn10_verify, isbn13_check_digit, isbn13_verify};
pub use config::NormalizerConfig;
pub use convert::{
    isbn10_to_isbn13, normalize, priced_ean_to_isbn13, priced_isbn10_to_isbn13,
    scanned_to_isbn13, Conversion,
};
pub use error::{IsbnError, Result};
pub use isbn::{Isbn10, Isbn13};
