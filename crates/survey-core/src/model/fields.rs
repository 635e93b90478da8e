use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A single answer: one string, or an ordered list for multi-select fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Render for display, joining multi-select values with `", "`
    ///
    /// Returns `None` for a blank answer (empty string or empty list), which
    /// every formatter treats the same as an absent field.
    pub fn display(&self) -> Option<String> {
        match self {
            FieldValue::Single(s) if s.is_empty() => None,
            FieldValue::Single(s) => Some(s.clone()),
            FieldValue::Multiple(values) if values.is_empty() => None,
            FieldValue::Multiple(values) => Some(values.join(", ")),
        }
    }

    /// Whether the answer satisfies a required-presence check
    ///
    /// Whitespace-only text does not count; a list counts if any entry is
    /// non-blank.
    pub fn is_answered(&self) -> bool {
        match self {
            FieldValue::Single(s) => !s.trim().is_empty(),
            FieldValue::Multiple(values) => values.iter().any(|v| !v.trim().is_empty()),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Single(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Single(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Field name to answer mapping for one submission
///
/// Keys are kept sorted so serialization is deterministic. Absent fields are
/// simply not present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, FieldValue>);

impl FormFields {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Fold raw `(name, value)` form entries into a mapping
    ///
    /// A name seen more than once (checkbox groups) becomes a `Multiple`
    /// holding every value in submission order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Self::new();
        for (key, value) in pairs {
            let value = value.into();
            match fields.0.entry(key.into()) {
                Entry::Occupied(mut existing) => existing.get_mut().push(value),
                Entry::Vacant(slot) => {
                    slot.insert(FieldValue::Single(value));
                }
            }
        }
        fields
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Display string for `key`, `None` when absent or blank
    pub fn display(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(FieldValue::display)
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(FieldValue::is_answered)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormFields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
