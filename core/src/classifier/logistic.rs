use crate::classifier::interface::{BinaryModel, SparseVector};
use crate::error::{CoreError, CoreResult, InferenceError};
use serde::{Deserialize, Serialize};

pub const LOGISTIC_FORMAT_V1: &str = "logistic_v1";

/// Binary logistic regression over TF-IDF columns. Class 1 is FAKE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub format: String,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    pub fn from_json_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let m: LogisticModel = serde_json::from_slice(bytes)?;
        if m.format != LOGISTIC_FORMAT_V1 {
            return Err(CoreError::InvalidArtifact(format!(
                "model format must be {}, got {}",
                LOGISTIC_FORMAT_V1, m.format
            )));
        }
        if m.coef.is_empty() {
            return Err(CoreError::InvalidArtifact(
                "model has no coefficients".to_string(),
            ));
        }
        if !m.intercept.is_finite() || m.coef.iter().any(|w| !w.is_finite()) {
            return Err(CoreError::InvalidArtifact(
                "model coefficients must be finite".to_string(),
            ));
        }
        Ok(m)
    }

    pub fn decision_function(&self, features: &SparseVector) -> Result<f64, InferenceError> {
        if features.dim != self.coef.len() {
            return Err(InferenceError::FeatureCountMismatch {
                vectorizer: features.dim,
                model: self.coef.len(),
            });
        }
        let mut z = self.intercept;
        for &(col, value) in &features.entries {
            let w = self.coef.get(col).ok_or(InferenceError::DimensionMismatch {
                index: col,
                n_features: self.coef.len(),
            })?;
            z += w * value;
        }
        Ok(z)
    }
}

impl BinaryModel for LogisticModel {
    fn predict_proba(&self, features: &SparseVector) -> Result<[f64; 2], InferenceError> {
        let p_fake = sigmoid(self.decision_function(features)?);
        Ok([1.0 - p_fake, p_fake])
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
