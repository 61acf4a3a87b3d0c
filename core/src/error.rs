use thiserror::Error;

/// Caller errors on the three posting fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title, Company and Description are required.")]
    MissingField { field: &'static str },

    #[error("Job description too short. Please enter at least {min_chars} characters.")]
    DescriptionTooShort { min_chars: usize, actual_chars: usize },
}

/// Failures raised by a vectorizer or model while scoring a single text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("feature index {index} out of range for model with {n_features} coefficients")]
    DimensionMismatch { index: usize, n_features: usize },

    #[error("vectorizer emits {vectorizer} features but model expects {model}")]
    FeatureCountMismatch { vectorizer: usize, model: usize },

    #[error("model produced non-finite probabilities ({p_real}, {p_fake})")]
    NonFiniteProbability { p_real: f64, p_fake: f64 },

    #[error("artifact panicked during inference: {0}")]
    Panicked(String),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("prediction failed: {0}")]
    PredictionError(#[source] InferenceError),

    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
