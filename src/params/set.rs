use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized parameter keys. Anything else inside a token is dropped
/// during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKey {
    Namespace,
    Include,
    Exclude,
}

impl ParamKey {
    /// Allow-list lookup. Raw keys are matched case-insensitively.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "namespace" => Some(ParamKey::Namespace),
            "include" => Some(ParamKey::Include),
            "exclude" => Some(ParamKey::Exclude),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::Namespace => "namespace",
            ParamKey::Include => "include",
            ParamKey::Exclude => "exclude",
        }
    }
}

/// The validated key/value pairs of one token occurrence.
///
/// Duplicate keys resolve to the last occurrence in the raw text
/// (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    inner: BTreeMap<ParamKey, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        ParameterSet {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: ParamKey, value: impl Into<String>) {
        self.inner.insert(key, value.into());
    }

    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.inner.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, &str)> {
        self.inner.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
