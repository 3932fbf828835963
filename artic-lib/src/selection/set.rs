//! Selection set keyed by record id.

use std::collections::HashMap;

use crate::model::Identified;

/// The records currently selected, keyed by id.
///
/// Keys are always derived from the stored record, so an entry's key equals
/// the id of its value.
#[derive(Debug, Clone)]
pub struct SelectionSet<R: Identified> {
    entries: HashMap<R::Id, R>,
}

impl<R: Identified> Default for SelectionSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Identified> SelectionSet<R> {
    /// Creates an empty selection set.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts a record, replacing any stored copy with the same id.
    ///
    /// Returns `true` if the id was not selected before.
    pub fn insert(&mut self, record: R) -> bool {
        self.entries.insert(record.id(), record).is_none()
    }

    /// Replaces the stored copy of an already selected record.
    ///
    /// Returns `false` and leaves the set unchanged if the id is not selected.
    pub fn refresh(&mut self, record: &R) -> bool
    where
        R: Clone,
    {
        match self.entries.get_mut(&record.id()) {
            Some(stored) => {
                *stored = record.clone();
                true
            }
            None => false,
        }
    }

    /// Removes a record by id, returning the stored copy.
    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        self.entries.remove(id)
    }

    /// Returns `true` if the id is selected.
    pub fn contains(&self, id: &R::Id) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the stored copy for an id.
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.entries.get(id)
    }

    /// Returns the number of selected records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the selected records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.entries.values()
    }

    /// Iterates over the selected ids in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &R::Id> {
        self.entries.keys()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
