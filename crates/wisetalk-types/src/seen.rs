//! The set of quote texts already shown to this profile.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered set of quote texts.
///
/// Membership is exact byte-for-byte string equality. Serializes as a JSON
/// array of strings in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    /// Insert a text. Returns `false` if it was already present.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.index.contains(&text) {
            return false;
        }
        self.index.insert(text.clone());
        self.order.push(text);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Build from a persisted JSON value, tolerating junk.
    ///
    /// Anything other than an array yields an empty set; non-string
    /// elements are skipped.
    pub fn from_json_lenient(value: &serde_json::Value) -> Self {
        let mut set = Self::new();
        if let Some(items) = value.as_array() {
            for item in items {
                if let Some(text) = item.as_str() {
                    set.insert(text);
                }
            }
        }
        set
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.order
                .iter()
                .map(|s| serde_json::Value::String(s.clone()))
                .collect(),
        )
    }
}

impl<S: Into<String>> FromIterator<S> for SeenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for text in iter {
            set.insert(text);
        }
        set
    }
}

impl Serialize for SeenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SeenSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
