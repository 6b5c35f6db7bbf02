//! User record and its identifier

use std::fmt;

/// Identifier of a record, unique within a store for the whole session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One user entry
///
/// Records are immutable once created; there is no edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier assigned by the store
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Favourite colour, free text
    pub favourite_colour: String,
}

impl Record {
    /// Create a record with an explicit identifier
    pub fn new(id: RecordId, name: impl Into<String>, age: u32, favourite_colour: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            favourite_colour: favourite_colour.into(),
        }
    }
}
