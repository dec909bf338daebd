//! Noun dictionary
//!
//! The dictionary only grows: entries can be inserted or overwritten, never
//! removed. Iteration is in key order.

use crate::predictor::NounScore;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Value stored for a noun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NounEntry {
    /// Full predictor record
    Scored(NounScore),
    /// Raw value such as a frequency or a caller-supplied score
    Provisional(f64),
}

impl NounEntry {
    /// The headline score of the entry
    pub fn score(&self) -> f64 {
        match self {
            NounEntry::Scored(record) => record.score,
            NounEntry::Provisional(value) => *value,
        }
    }

    /// The predictor record, if the entry has one
    pub fn as_scored(&self) -> Option<&NounScore> {
        match self {
            NounEntry::Scored(record) => Some(record),
            NounEntry::Provisional(_) => None,
        }
    }

    /// Whether the entry still awaits a predictor record
    pub fn is_provisional(&self) -> bool {
        matches!(self, NounEntry::Provisional(_))
    }
}

impl From<NounScore> for NounEntry {
    fn from(record: NounScore) -> Self {
        NounEntry::Scored(record)
    }
}

/// Mapping from noun to its entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NounDictionary {
    entries: BTreeMap<String, NounEntry>,
}

impl NounDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry, returning the previous one
    pub fn insert(
        &mut self,
        noun: impl Into<String>,
        entry: impl Into<NounEntry>,
    ) -> Option<NounEntry> {
        self.entries.insert(noun.into(), entry.into())
    }

    /// Whether the noun is present
    #[inline]
    pub fn contains(&self, noun: &str) -> bool {
        self.entries.contains_key(noun)
    }

    /// Entry of a noun
    pub fn get(&self, noun: &str) -> Option<&NounEntry> {
        self.entries.get(noun)
    }

    /// Number of nouns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no noun
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &NounEntry) -> bool) {
        self.entries.retain(|noun, entry| keep(noun, entry));
    }

    /// Entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, NounEntry> {
        self.entries.iter()
    }

    /// Nouns in key order
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries sorted by descending score, ties by noun
    pub fn ranked(&self) -> Vec<(&str, &NounEntry)> {
        let mut ranked: Vec<_> = self.entries.iter().map(|(n, e)| (n.as_str(), e)).collect();
        ranked.sort_by(|a, b| b.1.score().total_cmp(&a.1.score()).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl FromIterator<(String, NounEntry)> for NounDictionary {
    fn from_iter<T: IntoIterator<Item = (String, NounEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NounDictionary {
    type Item = (String, NounEntry);
    type IntoIter = btree_map::IntoIter<String, NounEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a NounDictionary {
    type Item = (&'a String, &'a NounEntry);
    type IntoIter = btree_map::Iter<'a, String, NounEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
