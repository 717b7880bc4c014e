//! Registry implementation
//!
//! Vec-backed record list with first-match semantics.

use crate::model::Keyed;

/// Ordered list of records keyed by name
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    records: Vec<T>,
}

impl<T: Keyed> Registry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create an empty registry with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record. Returns the new length.
    pub fn push(&mut self, record: T) -> usize {
        self.records.push(record);
        self.records.len()
    }

    /// Index of the first record named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.key() == name)
    }

    /// First record named `name`
    pub fn get(&self, name: &str) -> Option<&T> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Replace the first record named `name`, keeping its position
    ///
    /// Returns the record that was replaced, or `None` (and drops nothing)
    /// if no record matched.
    pub fn replace_first(&mut self, name: &str, record: T) -> Option<T> {
        let index = self.position(name)?;
        Some(std::mem::replace(&mut self.records[index], record))
    }

    /// Remove the first record named `name`, shifting later records down
    pub fn remove_first(&mut self, name: &str) -> Option<T> {
        let index = self.position(name)?;
        Some(self.records.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> From<Vec<T>> for Registry<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}
