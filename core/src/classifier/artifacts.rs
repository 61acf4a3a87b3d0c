use crate::classifier::interface::{
    BinaryModel, ClassifierVerdict, PostingClassifier, TextVectorizer,
};
use crate::classifier::logistic::LogisticModel;
use crate::classifier::tfidf::TfidfVectorizer;
use crate::config::ScorerConfig;
use crate::error::{CoreError, CoreResult, InferenceError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Identity of the artifacts an [`ArtifactPair`] was built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactSnapshot {
    pub model_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectorizer_sha256: Option<String>,
}

/// A trained vectorizer and model, either of which may be missing.
///
/// Built once at startup and shared read-only. To replace the artifacts,
/// build a new pair and swap the `Arc` that holds it.
#[derive(Clone, Default)]
pub struct ArtifactPair {
    vectorizer: Option<Arc<dyn TextVectorizer>>,
    model: Option<Arc<dyn BinaryModel>>,
    snapshot: ArtifactSnapshot,
}

impl std::fmt::Debug for ArtifactPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactPair")
            .field("vectorizer_loaded", &self.vectorizer_loaded())
            .field("model_loaded", &self.model_loaded())
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

impl ArtifactPair {
    pub fn new(vectorizer: Arc<dyn TextVectorizer>, model: Arc<dyn BinaryModel>) -> Self {
        Self::from_parts(Some(vectorizer), Some(model))
    }

    pub fn from_parts(
        vectorizer: Option<Arc<dyn TextVectorizer>>,
        model: Option<Arc<dyn BinaryModel>>,
    ) -> Self {
        Self {
            vectorizer,
            model,
            snapshot: ArtifactSnapshot::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, snapshot: ArtifactSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn snapshot(&self) -> &ArtifactSnapshot {
        &self.snapshot
    }

    pub fn vectorizer_loaded(&self) -> bool {
        self.vectorizer.is_some()
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.vectorizer_loaded() && self.model_loaded()
    }
}

impl PostingClassifier for ArtifactPair {
    fn classify(&self, text: &str) -> CoreResult<ClassifierVerdict> {
        let (vectorizer, model) = match (&self.vectorizer, &self.model) {
            (Some(v), Some(m)) => (v, m),
            (None, _) => {
                return Err(CoreError::ModelUnavailable(
                    "vectorizer not loaded".to_string(),
                ))
            }
            (_, None) => {
                return Err(CoreError::ModelUnavailable("model not loaded".to_string()))
            }
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let features = vectorizer.transform(text)?;
            let proba = model.predict_proba(&features)?;
            ClassifierVerdict::from_probabilities(proba)
        }));

        let cause = match outcome {
            Ok(Ok(verdict)) => return Ok(verdict),
            Ok(Err(e)) => e,
            Err(payload) => InferenceError::Panicked(panic_message(payload.as_ref())),
        };
        error!(error = %cause, "classification failed");
        Err(CoreError::PredictionError(cause))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

pub fn load_vectorizer(path: &Path) -> CoreResult<(TfidfVectorizer, String)> {
    let bytes = std::fs::read(path)?;
    let v = TfidfVectorizer::from_json_bytes(&bytes)?;
    Ok((v, sha256_hex(&bytes)))
}

pub fn load_model(path: &Path) -> CoreResult<(LogisticModel, String)> {
    let bytes = std::fs::read(path)?;
    let m = LogisticModel::from_json_bytes(&bytes)?;
    Ok((m, sha256_hex(&bytes)))
}

/// Loads both artifacts named by `config`. A half that fails to load is
/// logged and left absent; scoring then reports `ModelUnavailable`.
pub fn load_artifacts(config: &ScorerConfig) -> ArtifactPair {
    let mut snapshot = ArtifactSnapshot {
        model_version: config.model_version.clone(),
        ..ArtifactSnapshot::default()
    };

    let vectorizer: Option<Arc<dyn TextVectorizer>> = match load_vectorizer(&config.vectorizer_path)
    {
        Ok((v, sha)) => {
            info!(
                path = %config.vectorizer_path.display(),
                n_features = v.idf.len(),
                sha256 = %sha,
                "vectorizer loaded"
            );
            snapshot.vectorizer_sha256 = Some(sha);
            Some(Arc::new(v))
        }
        Err(e) => {
            warn!(path = %config.vectorizer_path.display(), error = %e, "vectorizer not loaded");
            None
        }
    };

    let model: Option<Arc<dyn BinaryModel>> = match load_model(&config.model_path) {
        Ok((m, sha)) => {
            info!(
                path = %config.model_path.display(),
                n_features = m.coef.len(),
                sha256 = %sha,
                "model loaded"
            );
            snapshot.model_sha256 = Some(sha);
            Some(Arc::new(m))
        }
        Err(e) => {
            warn!(path = %config.model_path.display(), error = %e, "model not loaded");
            None
        }
    };

    ArtifactPair::from_parts(vectorizer, model).with_snapshot(snapshot)
}
