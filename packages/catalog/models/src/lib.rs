#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Field record and catalog types for the 2D-Doc field catalog.
//!
//! A [`FieldCatalog`] is the ordered list of [`FieldRecord`]s extracted from
//! the text rendering of the 2D-Doc technical specification. It is the
//! structured artifact consumed by the 2D-Doc encoder/decoder, so the
//! serialized key names (`id`, `nom`, `min`, `max`, `nature`,
//! `description`) and the array order are part of its contract.

use serde::{Deserialize, Serialize};

/// One field specification from the 2D-Doc data dictionary.
///
/// Every value is kept as the literal text found in the source document,
/// trimmed. Size bounds in particular are not parsed: they may contain
/// units, ranges or the word "variable".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Two-character field identifier (e.g. `"10"`, `"AB"`).
    pub id: String,
    /// Human-readable field label.
    #[serde(rename = "nom")]
    pub name: String,
    /// Minimum size, as written in the source.
    #[serde(rename = "min")]
    pub min_size: String,
    /// Maximum size, as written in the source.
    #[serde(rename = "max")]
    pub max_size: String,
    /// Value type label (e.g. `"Alphanumérique"`).
    #[serde(rename = "nature")]
    pub value_type: String,
    /// Free-text description collapsed onto a single line.
    pub description: String,
}

/// Ordered collection of [`FieldRecord`]s, in source order.
///
/// Serializes as a plain JSON array. The catalog never re-sorts or merges
/// records; duplicate ids are preserved so callers can decide what to do
/// with them (see [`FieldCatalog::duplicate_ids`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    records: Vec<FieldRecord>,
}

impl FieldCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record at the end of the catalog.
    pub fn push(&mut self, record: FieldRecord) {
        self.records.push(record);
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRecord> {
        self.records.iter()
    }

    /// Returns the first record with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FieldRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns the ids that appear more than once, in order of first
    /// appearance.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::BTreeSet::new();
        let mut duplicates: Vec<&str> = Vec::new();

        for record in &self.records {
            let id = record.id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }

        duplicates
    }

    /// Borrows the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldRecord] {
        &self.records
    }

    /// Consumes the catalog, returning the underlying records.
    #[must_use]
    pub fn into_records(self) -> Vec<FieldRecord> {
        self.records
    }
}

impl From<Vec<FieldRecord>> for FieldCatalog {
    fn from(records: Vec<FieldRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<FieldRecord> for FieldCatalog {
    fn from_iter<I: IntoIterator<Item = FieldRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldCatalog {
    type Item = &'a FieldRecord;
    type IntoIter = std::slice::Iter<'a, FieldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for FieldCatalog {
    type Item = FieldRecord;
    type IntoIter = std::vec::IntoIter<FieldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
