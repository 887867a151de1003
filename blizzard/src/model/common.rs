use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference to a follow-up resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Display string, either already localized or keyed by locale.
///
/// Requests carrying a `locale` parameter receive plain strings, others receive every
/// translation keyed by locale code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    Text(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedString {
    /// Value for `locale`, a plain string matches every locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Localized(map) => map.get(locale).map(String::as_str),
        }
    }

    /// Whether any translation equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        match self {
            Self::Text(value) => value == text,
            Self::Localized(map) => map.values().any(|value| value == text),
        }
    }
}

impl From<&str> for LocalizedString {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Envelope of the search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub results: Vec<SearchResult<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub data: T,
}
