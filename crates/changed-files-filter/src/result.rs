use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Filter name (or raw pattern) to matched paths, in filter order.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    matches: IndexMap<String, Vec<String>>,
}

impl MatchResult {
    pub(crate) fn insert(&mut self, filter: String, paths: Vec<String>) {
        if !paths.is_empty() {
            self.matches.insert(filter, paths);
        }
    }

    #[must_use]
    pub fn any_changed(&self) -> bool {
        self.matches.values().any(|paths| !paths.is_empty())
    }

    #[must_use]
    pub fn get(&self, filter: &str) -> Option<&[String]> {
        self.matches.get(filter).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, filter: &str) -> bool {
        self.matches.contains_key(filter)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.matches
            .iter()
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }

    /// Union of all matched paths, in first-seen order.
    #[must_use]
    pub fn matched_paths(&self) -> IndexSet<&str> {
        self.matches
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
