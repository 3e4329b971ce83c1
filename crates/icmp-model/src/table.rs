//! Flat type table produced by the registry compiler.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One sub-code of an ICMP type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    pub name: String,
    pub numeric_value: u8,
    pub is_unassigned: bool,
}

/// Canonical entry for a single numeric ICMP type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub numeric_value: u8,
    /// Synthesized identifier; embeds `numeric_value` so it is unique.
    pub symbolic_name: String,
    pub description: String,
    pub is_deprecated: bool,
    pub is_unassigned: bool,
    /// Sub-codes in registry traversal order. Values may repeat.
    pub sub_codes: Vec<CodeRecord>,
}

impl TypeRecord {
    /// Creates a record with no sub-codes.
    pub fn new(
        numeric_value: u8,
        symbolic_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            numeric_value,
            symbolic_name: symbolic_name.into(),
            description: description.into(),
            is_deprecated: false,
            is_unassigned: false,
            sub_codes: Vec::new(),
        }
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.is_deprecated = deprecated;
        self
    }

    pub fn with_unassigned(mut self, unassigned: bool) -> Self {
        self.is_unassigned = unassigned;
        self
    }

    /// Appends a sub-code, preserving insertion order.
    pub fn push_code(&mut self, code: CodeRecord) {
        self.sub_codes.push(code);
    }
}

/// Mapping from numeric type value to its canonical record.
///
/// Iteration over the underlying map is unordered; use [`TypeTable::sorted`]
/// when a stable order is needed. Serializes as a list sorted by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<TypeRecord>")]
pub struct TypeTable {
    records: HashMap<u8, TypeRecord>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` unless its value is already present.
    ///
    /// Returns `true` when the record was inserted. An existing entry is
    /// never replaced: the first writer for a value wins.
    pub fn insert_if_absent(&mut self, record: TypeRecord) -> bool {
        match self.records.entry(record.numeric_value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.records.contains_key(&value)
    }

    pub fn get(&self, value: u8) -> Option<&TypeRecord> {
        self.records.get(&value)
    }

    pub fn get_mut(&mut self, value: u8) -> Option<&mut TypeRecord> {
        self.records.get_mut(&value)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unordered iteration over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
        self.records.values()
    }

    /// Records ordered by ascending numeric value.
    pub fn sorted(&self) -> Vec<&TypeRecord> {
        let mut records: Vec<&TypeRecord> = self.records.values().collect();
        records.sort_by_key(|record| record.numeric_value);
        records
    }

    /// Total number of sub-codes across all types.
    pub fn code_count(&self) -> usize {
        self.records.values().map(|record| record.sub_codes.len()).sum()
    }
}

impl From<Vec<TypeRecord>> for TypeTable {
    fn from(records: Vec<TypeRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert_if_absent(record);
        }
        table
    }
}

impl Serialize for TypeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}
