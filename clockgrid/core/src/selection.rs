//! Word Highlight Selection
//!
//! A set of clue-wide word numbers the user has marked. Operations return a
//! new set and never touch their input.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Selected words, keyed by [`Word::number_global`](crate::clue::Word::number_global)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightSet(BTreeSet<usize>);

impl HighlightSet {
    /// The empty selection
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// A copy with `key` removed if present, added if absent
    #[must_use]
    pub fn toggle(&self, key: usize) -> Self {
        let mut keys = self.0.clone();
        if !keys.remove(&key) {
            keys.insert(key);
        }
        Self(keys)
    }

    /// Whether `key` is selected
    #[must_use]
    pub fn contains(&self, key: usize) -> bool {
        self.0.contains(&key)
    }

    /// Number of selected words
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected keys in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
