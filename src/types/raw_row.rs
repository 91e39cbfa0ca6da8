use std::collections::HashMap;

/// A single record as produced by one of the input sources, before normalization.
///
/// Keys are the flattened column names (`id`, `state`, `amount`, `currency_code`, ...).
/// A `None` value is an explicitly missing cell, which is different from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    values: HashMap<String, Option<String>>
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Returns the value for `key`, treating an absent key and a missing cell alike.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, Option<String>)>>(iter: T) -> Self {
        let mut row = RawRow::new();

        for (key, value) in iter {
            row.insert(key, value);
        }

        row
    }
}
