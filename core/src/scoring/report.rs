use crate::classifier::ArtifactPair;
use crate::error::CoreError;
use crate::policy::types::{RiskLevel, Verdict};
use crate::redflags::RedFlagSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    #[serde(rename = "result")]
    pub final_result: Verdict,
    pub model_result: Verdict,
    pub confidence: f64,
    pub red_flags: RedFlagSet,
    pub risk_level: RiskLevel,
    pub warning: Option<String>,
}

/// Successful scoring response. Field names are the public response contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreReport {
    pub success: bool,
    pub model_version: String,
    /// Raw class index of `model_result` (REAL = 0, FAKE = 1).
    pub prediction: u8,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

impl ScoreReport {
    pub fn new(model_version: impl Into<String>, assessment: RiskAssessment) -> Self {
        Self {
            success: true,
            model_version: model_version.into(),
            prediction: assessment.model_result.prediction(),
            assessment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CoreError {
    /// HTTP-equivalent status for the response layer.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::InvalidInput(_) => 400,
            _ => 500,
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        let (error, details) = match self {
            CoreError::InvalidInput(v) => (v.to_string(), None),
            CoreError::ModelUnavailable(why) => (
                "Model not loaded properly. Please retrain or check model artifacts.".to_string(),
                Some(why.clone()),
            ),
            CoreError::PredictionError(cause) => {
                ("Prediction failed.".to_string(), Some(cause.to_string()))
            }
            other => ("Internal error.".to_string(), Some(other.to_string())),
        };
        ErrorReport {
            success: false,
            error,
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
    pub model_version: String,
    pub model_loaded: bool,
    pub vectorizer_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectorizer_sha256: Option<String>,
}

impl HealthReport {
    pub fn for_artifacts(model_version: &str, artifacts: &ArtifactPair) -> Self {
        let snapshot = artifacts.snapshot();
        let message = if artifacts.is_ready() {
            "Scoring core is ready"
        } else {
            "Scoring disabled: trained artifacts missing"
        };
        Self {
            status: "OK".to_string(),
            message: message.to_string(),
            model_version: model_version.to_string(),
            model_loaded: artifacts.model_loaded(),
            vectorizer_loaded: artifacts.vectorizer_loaded(),
            model_sha256: snapshot.model_sha256.clone(),
            vectorizer_sha256: snapshot.vectorizer_sha256.clone(),
        }
    }
}
