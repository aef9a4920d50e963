//! In-memory record store: load, bounded slicing, exact-match query.
//!
//! The store is immutable after load. Sorting never runs on the store
//! itself: [`RecordStore::slice`] hands out an owned copy, which is what a
//! caller passes to a strategy (strategies reorder their input in place).

use crate::error::{Error, Result};
use crate::record::{Field, FieldValue, Record};
use std::fs::File;
use std::path::Path;

/// An ordered record set, insertion order = source file order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Parses a headered CSV source into a store.
    ///
    /// Fails with [`Error::SourceUnavailable`] if the file cannot be
    /// opened, and with [`Error::MalformedRecord`] on the first row that
    /// fails type validation. A failed load populates nothing: there is no
    /// best-effort partial store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row.map_err(|source| Error::MalformedRecord {
                line: source.position().map_or(0, |p| p.line()),
                source,
            })?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Builds a store from records already in memory.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of the full record sequence.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Owned copy of the first `min(n, len)` records, in original order.
    ///
    /// This is the hand-off point to the sorting strategies; the store
    /// itself stays untouched across repeated benchmark runs.
    pub fn slice(&self, n: usize) -> Vec<Record> {
        self.records[..n.min(self.records.len())].to_vec()
    }

    /// Exact-match scan over the full store. See [`find_by_field`].
    pub fn find_by_field(&self, field: Field, value: &FieldValue) -> Vec<Record> {
        find_by_field(&self.records, field, value)
    }
}

/// Linear exact-match scan: every record whose `field` equals `value`, in
/// original relative order. Numeric equality for `ID`, exact text match
/// otherwise. No match is an empty result, not an error. Truncating long
/// results is a presentation concern, never done here.
pub fn find_by_field(records: &[Record], field: Field, value: &FieldValue) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.field_matches(field, value))
        .cloned()
        .collect()
}
