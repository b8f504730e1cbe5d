//! Header normalization and canonical column mapping
//!
//! Arbitrary header spellings are mapped to the four canonical field keys
//! (`date`, `hours`, `rate`, `description`). Unknown headers pass through
//! lowercased and trimmed; they occupy a slot in the map but are never
//! referenced by the row parser.

use crate::constants::{
    CANONICAL_FIELDS, DATE_ALIASES, DESCRIPTION_ALIASES, HOURS_ALIASES, RATE_ALIASES, fields,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalize a raw header spelling to its canonical field key
///
/// Trims whitespace and lowercases, then applies the alias tables.
/// Deterministic, pure, and idempotent: normalizing an already-normalized
/// header is a no-op.
pub fn normalize_header(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    if DATE_ALIASES.contains(&lowered.as_str()) {
        fields::DATE.to_string()
    } else if HOURS_ALIASES.contains(&lowered.as_str()) {
        fields::HOURS.to_string()
    } else if RATE_ALIASES.contains(&lowered.as_str()) {
        fields::RATE.to_string()
    } else if DESCRIPTION_ALIASES.contains(&lowered.as_str()) {
        fields::DESCRIPTION.to_string()
    } else {
        lowered
    }
}

/// Mapping from canonical field name to zero-based column index
///
/// Built once per parse invocation and discarded after. Construction fails
/// if any of the four canonical keys is absent, before any data row is
/// processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Build the map from a raw header row
    ///
    /// The first occurrence of each normalized name wins; duplicates are
    /// ignored. Fails naming the first missing canonical field.
    pub fn build<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut columns = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            let normalized = normalize_header(header.as_ref());
            columns.entry(normalized).or_insert(index);
        }

        for field in CANONICAL_FIELDS {
            if !columns.contains_key(*field) {
                return Err(Error::missing_header_field(*field));
            }
        }

        Ok(Self { columns })
    }

    /// Column index for a field name, if present
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.columns.get(field).copied()
    }

    /// Whether the map contains a column with the given normalized name
    pub fn contains(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// All normalized column names with their indices
    pub fn columns(&self) -> &HashMap<String, usize> {
        &self.columns
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
