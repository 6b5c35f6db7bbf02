//! Ordered store of user records

use crate::store::record::{Record, RecordId};

/// Records present on a fresh start, in display order
pub const SEED_RECORDS: [(&str, u32, &str); 5] = [
    ("Siya", 25, "Red"),
    ("Caryn", 30, "Blue"),
    ("Jaco", 22, "Green"),
    ("Mihle", 28, "Yellow"),
    ("Koosie", 12, "Purple"),
];

/// Exclusive owner of the session's records
///
/// Records keep insertion order. Identifiers come from a counter that only
/// moves forward, so an id is never handed out twice even after deletions.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the five seed records (ids "1" to "5")
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, age, colour) in SEED_RECORDS {
            store.add(name, age, colour);
        }
        store
    }

    /// Current records, oldest first
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Append a new record and return a copy of it
    ///
    /// Callers validate the fields beforehand; this never fails.
    pub fn add(&mut self, name: impl Into<String>, age: u32, colour: impl Into<String>) -> Record {
        let id = RecordId::new(self.next_id.to_string());
        self.next_id += 1;

        let record = Record::new(id, name, age, colour);
        self.records.push(record.clone());
        tracing::info!(id = %record.id, name = %record.name, "Record added");
        record
    }

    /// Remove the record with `id`
    ///
    /// Returns the removed record, or `None` if no record has that id.
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let index = self.position(id)?;
        let record = self.records.remove(index);
        tracing::info!(id = %record.id, name = %record.name, "Record removed");
        Some(record)
    }

    /// Look up a record by id
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Index of the record with `id` in the current order
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
