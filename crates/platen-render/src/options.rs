use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extra options forwarded to the PDF engine.
///
/// Keys and values are engine-defined; [`crate::engine::CommandEngine`] maps
/// each entry to a command-line flag. A view holds one configured instance
/// and clones it for every render, so mutating the configured options never
/// affects a call already made.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PdfOptions(BTreeMap<String, Value>);

impl PdfOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for PdfOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
