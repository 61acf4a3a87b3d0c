use crate::classifier::interface::{SparseVector, TextVectorizer};
use crate::error::{CoreError, CoreResult, InferenceError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

pub const TFIDF_FORMAT_V1: &str = "tfidf_v1";

/// Fitted TF-IDF vocabulary exported by the training pipeline.
///
/// Tokens are runs of two or more word characters after lowercasing; stop
/// words are dropped before n-grams are built, and n-grams join tokens with a
/// single space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub format: String,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub stop_words: HashSet<String>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_true")]
    pub l2_normalize: bool,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

impl TfidfVectorizer {
    pub fn from_json_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let v: TfidfVectorizer = serde_json::from_slice(bytes)?;
        v.check()?;
        Ok(v)
    }

    fn check(&self) -> CoreResult<()> {
        if self.format != TFIDF_FORMAT_V1 {
            return Err(CoreError::InvalidArtifact(format!(
                "vectorizer format must be {}, got {}",
                TFIDF_FORMAT_V1, self.format
            )));
        }
        if self.idf.len() != self.vocabulary.len() {
            return Err(CoreError::InvalidArtifact(format!(
                "idf has {} weights for {} vocabulary terms",
                self.idf.len(),
                self.vocabulary.len()
            )));
        }
        if let Some((term, idx)) = self.vocabulary.iter().find(|(_, i)| **i >= self.idf.len()) {
            return Err(CoreError::InvalidArtifact(format!(
                "vocabulary term {:?} maps to column {} outside 0..{}",
                term,
                idx,
                self.idf.len()
            )));
        }
        if self.idf.iter().any(|w| !w.is_finite()) {
            return Err(CoreError::InvalidArtifact(
                "idf weights must be finite".to_string(),
            ));
        }
        let (lo, hi) = self.ngram_range;
        if lo == 0 || lo > hi {
            return Err(CoreError::InvalidArtifact(format!(
                "invalid ngram_range ({}, {})",
                lo, hi
            )));
        }
        Ok(())
    }

    fn tokens<'a>(&self, lowered: &'a str) -> Vec<&'a str> {
        token_regex()
            .find_iter(lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect()
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<SparseVector, InferenceError> {
        let lowered = text.to_lowercase();
        let tokens = self.tokens(&lowered);

        // BTreeMap keeps columns sorted so downstream sums run in a fixed order.
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        let (lo, hi) = self.ngram_range;
        for n in lo..=hi {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&col) = self.vocabulary.get(&gram) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut entries = Vec::with_capacity(counts.len());
        for (col, tf) in counts {
            let idf = *self
                .idf
                .get(col)
                .ok_or(InferenceError::DimensionMismatch {
                    index: col,
                    n_features: self.idf.len(),
                })?;
            let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
            entries.push((col, tf * idf));
        }

        if self.l2_normalize {
            let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in entries.iter_mut() {
                    *w /= norm;
                }
            }
        }

        Ok(SparseVector {
            dim: self.idf.len(),
            entries,
        })
    }

    fn n_features(&self) -> usize {
        self.idf.len()
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer {
            format: TFIDF_FORMAT_V1.to_string(),
            vocabulary: [("pay", 0), ("fee", 1), ("pay fee", 2), ("engineer", 3)]
                .into_iter()
                .map(|(t, i)| (t.to_string(), i))
                .collect(),
            idf: vec![1.0, 2.0, 3.0, 1.5],
            ngram_range: (1, 2),
            stop_words: ["the", "a"].into_iter().map(String::from).collect(),
            sublinear_tf: false,
            l2_normalize: false,
        }
    }

    #[test]
    fn bigrams_skip_stop_words() {
        let v = vectorizer();
        let x = v.transform("Pay the FEE").unwrap();
        assert_eq!(x.entries, vec![(0, 1.0), (1, 2.0), (2, 3.0)]);
        assert_eq!(x.dim, 4);
    }

    #[test]
    fn single_char_tokens_are_ignored() {
        let v = vectorizer();
        let x = v.transform("a b c").unwrap();
        assert_eq!(x.nnz(), 0);
    }

    #[test]
    fn l2_normalized_rows_have_unit_norm() {
        let mut v = vectorizer();
        v.l2_normalize = true;
        let x = v.transform("pay fee pay engineer").unwrap();
        let norm: f64 = x.entries.iter().map(|(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_idf_length_mismatch() {
        let mut v = vectorizer();
        v.idf.pop();
        let bytes = serde_json::to_vec(&v).unwrap();
        assert!(matches!(
            TfidfVectorizer::from_json_bytes(&bytes),
            Err(CoreError::InvalidArtifact(_))
        ));
    }
}
