use std::collections::BTreeMap;

use serde::Serialize;

/// Per-field error messages.
///
/// A key's absence means the field is currently valid. Inserting an empty
/// message is treated as clearing the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap<K: Ord> {
    entries: BTreeMap<K, String>,
}

impl<K: Ord> Default for ErrorMap<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> ErrorMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, message);
        }
    }

    pub fn remove(&mut self, key: K) -> Option<String> {
        self.entries.remove(&key)
    }

    pub fn get(&self, key: K) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<K: Ord + Copy> FromIterator<(K, String)> for ErrorMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for (key, message) in iter {
            map.insert(key, message);
        }
        map
    }
}
