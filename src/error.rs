//! Error types for the normalization engine

use thiserror::Error;

/// Result type for ISBN operations
pub type Result<T> = std::result::Result<T, IsbnError>;

/// ISBN normalization errors
#[derive(Error, Debug)]
pub enum IsbnError {
    #[error("expected {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("expected a decimal digit, got {ch:?}")]
    Digit { ch: char },

    #[error("unexpected prefix: {code} already carries the Bookland prefix")]
    UnexpectedPrefix { code: String },

    #[error("expected prefix: {code} does not carry the Bookland prefix")]
    MissingPrefix { code: String },

    #[error("no product found for UPC {upc}")]
    UpcNotFound { upc: String },

    #[error("UPC {upc} is ambiguous: {matches} distinct products")]
    UpcAmbiguous { upc: String, matches: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
