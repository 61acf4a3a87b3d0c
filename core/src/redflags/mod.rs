pub mod detector;
pub mod lexicon;

use serde::{Deserialize, Serialize};

/// Matched indicator labels in first-occurrence order, without duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RedFlagSet {
    labels: Vec<String>,
}

impl RedFlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl From<Vec<String>> for RedFlagSet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<RedFlagSet> for Vec<String> {
    fn from(set: RedFlagSet) -> Self {
        set.labels
    }
}

impl<S: Into<String>> FromIterator<S> for RedFlagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = RedFlagSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}
