//! Ordered record collections
//!
//! Skills, certifications and training records share the same lifecycle:
//! insert under a fresh identifier, patch some fields, remove. A
//! [`Collection`] keeps insertion order (the order the dashboard lists
//! records in) and gives O(1) lookup by identifier.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{CoreError, Result};

/// A record that lives in a [`Collection`].
pub trait Record: Clone {
    /// Identifier type
    type Id: Clone + Eq + Hash + std::fmt::Display;
    /// Partial update applied by [`Collection::update`]
    type Patch;

    /// Identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Check field constraints before the record enters a collection.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Apply a partial update in place.
    fn apply(&mut self, patch: &Self::Patch);
}

/// Insertion-ordered set of records keyed by identifier.
#[derive(Clone, Debug)]
pub struct Collection<T: Record> {
    records: IndexMap<T::Id, T>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Build from trusted records, keeping their order. Later duplicates
    /// replace earlier ones in place.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::new();
        for record in records {
            let id = record.id().clone();
            if collection.records.insert(id.clone(), record).is_some() {
                tracing::warn!("Duplicate record {} replaced an earlier one", id);
            }
        }
        collection
    }

    /// Build from untrusted records through [`Collection::insert`].
    ///
    /// Fails on the first duplicate identifier or invalid record.
    pub fn try_from_records(records: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut collection = Self::new();
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    /// Append a record.
    ///
    /// Fails if the identifier is taken or the record violates a constraint.
    pub fn insert(&mut self, record: T) -> Result<T::Id> {
        record.validate()?;
        let id = record.id().clone();
        if self.records.contains_key(&id) {
            return Err(CoreError::AlreadyExists(id.to_string()));
        }
        self.records.insert(id.clone(), record);
        Ok(id)
    }

    /// Apply a partial update to the record with `id`.
    ///
    /// The patched record is validated before it replaces the original.
    pub fn update(&mut self, id: &T::Id, patch: &T::Patch) -> Result<&T> {
        let current = self
            .records
            .get_mut(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let mut patched = current.clone();
        patched.apply(patch);
        patched.validate()?;
        *current = patched;
        Ok(current)
    }

    /// Remove the record with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.records.shift_remove(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.records.contains_key(id)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Snapshot of all records in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        // Order matters: compare as sequences
        self.records.len() == other.records.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Record> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        type Id = String;
        type Patch = String;

        fn id(&self) -> &String {
            &self.id
        }

        fn validate(&self) -> Result<()> {
            if self.text.is_empty() {
                return Err(CoreError::InvalidInput("text is empty".to_string()));
            }
            Ok(())
        }

        fn apply(&mut self, patch: &String) {
            self.text = patch.clone();
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut notes = Collection::new();
        notes.insert(note("b", "second")).unwrap();
        notes.insert(note("a", "first")).unwrap();

        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut notes = Collection::new();
        notes.insert(note("a", "x")).unwrap();
        let err = notes.insert(note("a", "y")).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyExists(_)));
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_update_validates_before_replacing() {
        let mut notes = Collection::new();
        notes.insert(note("a", "keep")).unwrap();

        let err = notes.update(&"a".to_string(), &String::new()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert_eq!(notes.get(&"a".to_string()).unwrap().text, "keep");

        notes.update(&"a".to_string(), &"changed".to_string()).unwrap();
        assert_eq!(notes.get(&"a".to_string()).unwrap().text, "changed");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut notes: Collection<Note> = Collection::new();
        let err = notes.update(&"zz".to_string(), &"x".to_string()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut notes: Collection<Note> =
            vec![note("1", "a"), note("2", "b"), note("3", "c")].into_iter().collect();

        assert!(notes.remove(&"2".to_string()).is_some());
        assert!(notes.remove(&"2".to_string()).is_none());

        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_try_from_records_rejects_duplicates() {
        let err = Collection::try_from_records(vec![note("1", "scripting"), note("1", "expert")]).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyExists(ref id) if id == "1"));

        let notes = Collection::try_from_records(vec![note("1", "a"), note("2", "b")]).unwrap();
        assert_eq!(notes.len(), 2);
    }
}
