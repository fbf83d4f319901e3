//! Named integer sequences threaded through the pipeline.

use indexmap::IndexMap;

use crate::error::{Result, SeqPipeError};

/// An ordered, resizable sequence of signed integers
pub type Sequence = Vec<i64>;

/// The mutable set of named sequences. Each sequence is created by exactly
/// one stage; later stages mutate it in place or read it to derive a new one.
/// Iteration follows creation order.
pub struct SequenceStore {
    data: IndexMap<String, Sequence>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self {
            data: IndexMap::new(),
        }
    }

    /// Register a sequence under `name`, replacing any previous one.
    pub fn insert(&mut self, name: &str, values: Sequence) {
        self.data.insert(name.to_string(), values);
    }

    pub fn get(&self, name: &str) -> Result<&Sequence> {
        self.data
            .get(name)
            .ok_or_else(|| SeqPipeError::missing_sequence(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Sequence> {
        self.data
            .get_mut(name)
            .ok_or_else(|| SeqPipeError::missing_sequence(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Sequence names in creation order
    pub fn names(&self) -> Vec<&String> {
        self.data.keys().collect()
    }
}

impl Default for SequenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_roundtrip() {
        let mut store = SequenceStore::new();

        store.insert("mySequence", vec![3, 1, 4]);
        store.insert("mySequence_2", vec![1, 5]);

        assert_eq!(store.get("mySequence").unwrap(), &vec![3, 1, 4]);
        assert_eq!(store.get("mySequence_2").unwrap(), &vec![1, 5]);
        assert!(store.contains("mySequence"));
        assert!(!store.contains("mySequence_3"));
    }

    #[test]
    fn test_missing_sequence_error() {
        let store = SequenceStore::new();
        let err = store.get("nonexistent").unwrap_err();
        assert!(matches!(err, SeqPipeError::MissingSequence(_)));
        assert_eq!(err.to_string(), "Unknown sequence 'nonexistent'");
    }

    #[test]
    fn test_in_place_mutation() {
        let mut store = SequenceStore::new();
        store.insert("mySequence", vec![5, 2, 9]);

        store.get_mut("mySequence").unwrap().sort_unstable();
        assert_eq!(store.get("mySequence").unwrap(), &vec![2, 5, 9]);
    }

    #[test]
    fn test_names_follow_creation_order() {
        let mut store = SequenceStore::new();
        store.insert("b", vec![]);
        store.insert("a", vec![]);
        store.insert("c", vec![]);

        assert_eq!(store.names(), vec!["b", "a", "c"]);
    }
}
