use crate::error::{CoreResult, InferenceError};
use crate::policy::types::Verdict;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sparse feature row; `entries` are sorted by column and unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    pub dim: usize,
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// First half of a trained artifact pair: raw text to features.
pub trait TextVectorizer: Send + Sync {
    fn transform(&self, text: &str) -> Result<SparseVector, InferenceError>;
    fn n_features(&self) -> usize;
}

/// Second half: features to `[p(REAL), p(FAKE)]`.
pub trait BinaryModel: Send + Sync {
    fn predict_proba(&self, features: &SparseVector) -> Result<[f64; 2], InferenceError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassifierVerdict {
    pub label: Verdict,
    /// Probability of `label` on a 0-100 scale, two decimals. Never below 50.
    pub confidence: f64,
}

impl ClassifierVerdict {
    /// Picks the argmax class. A tie resolves to REAL, matching the model's class order.
    pub fn from_probabilities(proba: [f64; 2]) -> Result<Self, InferenceError> {
        let [p_real, p_fake] = proba;
        if !p_real.is_finite() || !p_fake.is_finite() {
            return Err(InferenceError::NonFiniteProbability { p_real, p_fake });
        }
        let (label, p) = if p_fake > p_real {
            (Verdict::FAKE, p_fake)
        } else {
            (Verdict::REAL, p_real)
        };
        Ok(Self {
            label,
            confidence: round_2dp(p * 100.0),
        })
    }
}

fn round_2dp(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Anything that can turn posting text into a verdict.
pub trait PostingClassifier: Send + Sync {
    fn classify(&self, text: &str) -> CoreResult<ClassifierVerdict>;
}

impl<C: PostingClassifier + ?Sized> PostingClassifier for Arc<C> {
    fn classify(&self, text: &str) -> CoreResult<ClassifierVerdict> {
        (**self).classify(text)
    }
}

impl<C: PostingClassifier + ?Sized> PostingClassifier for &C {
    fn classify(&self, text: &str) -> CoreResult<ClassifierVerdict> {
        (**self).classify(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_argmax_probability_rounded() {
        let v = ClassifierVerdict::from_probabilities([0.123456, 0.876544]).unwrap();
        assert_eq!(v.label, Verdict::FAKE);
        assert_eq!(v.confidence, 87.65);
    }

    #[test]
    fn tie_goes_to_real() {
        let v = ClassifierVerdict::from_probabilities([0.5, 0.5]).unwrap();
        assert_eq!(v.label, Verdict::REAL);
        assert_eq!(v.confidence, 50.0);
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(
            ClassifierVerdict::from_probabilities([f64::NAN, 0.2]),
            Err(InferenceError::NonFiniteProbability { .. })
        ));
    }
}
