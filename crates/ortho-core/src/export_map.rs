use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical marker for a set boolean or option in the export map.
/// Matches the practice's Dutch-language document templates.
pub const TRUTHY: &str = "Ja";

/// Flat placeholder-name → value record handed to the document templates.
///
/// Keys are the literal placeholder names used inside the Word templates
/// (`enclosureRightCm`, `diabetes`, ...). Values are `""`, [`TRUTHY`] or a
/// pass-through string. Backed by a `BTreeMap` so serialization order is
/// stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportMap(BTreeMap<String, String>);

impl ExportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a value, returning the previous one if the key was already set.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Same key set, every value emptied.
    pub fn cleared(mut self) -> Self {
        for value in self.0.values_mut() {
            value.clear();
        }
        self
    }
}

impl From<BTreeMap<String, String>> for ExportMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for ExportMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, String)> for ExportMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ExportMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
