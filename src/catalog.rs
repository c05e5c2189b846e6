//! UPC catalog boundary
//!
//! Twelve-digit UPC codes carry no ISBN payload of their own; turning one
//! into an ISBN takes a product catalog. That catalog is an external
//! collaborator behind [`UpcResolver`]: the engine calls it synchronously,
//! treats it as opaque, and imposes no retry or timeout policy of its own.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// A product row returned by a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The 12-digit UPC the record is keyed by
    pub upc: String,
    /// The ISBN on file for this product (10- or 13-digit)
    pub isbn_number: String,
    /// Whether a newer record supersedes this one
    #[serde(default)]
    pub superseded: bool,
}

/// Contract for resolving a UPC to candidate product records.
///
/// Implementations may block on network or database IO. Returning an empty
/// vector is the normal "no match" outcome, not an error.
pub trait UpcResolver {
    /// All records on file for the given 12-digit UPC.
    fn resolve_upc(&self, upc: &str) -> Vec<ProductRecord>;
}

/// A resolver with no catalog behind it; every lookup comes back empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCatalog;

impl UpcResolver for NoCatalog {
    fn resolve_upc(&self, _upc: &str) -> Vec<ProductRecord> {
        Vec::new()
    }
}

/// A catalog loaded from a JSON file: an array of [`ProductRecord`]s,
/// indexed by UPC at load time.
///
/// This is the adapter the CLI uses; the engine itself never touches disk.
#[derive(Debug, Default)]
pub struct JsonCatalog {
    records: HashMap<String, Vec<ProductRecord>>,
}

impl JsonCatalog {
    /// Load and index a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rows: Vec<ProductRecord> = serde_json::from_str(&content)?;

        let mut records: HashMap<String, Vec<ProductRecord>> = HashMap::new();
        for row in rows {
            records.entry(row.upc.clone()).or_default().push(row);
        }
        Ok(Self { records })
    }

    /// Number of distinct UPCs on file.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl UpcResolver for JsonCatalog {
    fn resolve_upc(&self, upc: &str) -> Vec<ProductRecord> {
        self.records.get(upc).cloned().unwrap_or_default()
    }
}
