use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_MODEL_PATH: &str = "JOBGUARD_MODEL_PATH";
pub const ENV_VECTORIZER_PATH: &str = "JOBGUARD_VECTORIZER_PATH";
pub const ENV_MODEL_VERSION: &str = "JOBGUARD_MODEL_VERSION";

pub const DEFAULT_MODEL_VERSION: &str = "v1.0";

/// Where the trained artifacts live and which version string to report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScorerConfig {
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    #[serde(default = "default_model_version")]
    pub model_version: String,
}

fn default_model_version() -> String {
    DEFAULT_MODEL_VERSION.to_string()
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::from_base_dir(".")
    }
}

impl ScorerConfig {
    /// Artifacts under `<base>/models/`.
    pub fn from_base_dir(base: impl AsRef<Path>) -> Self {
        let models = base.as_ref().join("models");
        Self {
            model_path: models.join("fake_job_model.json"),
            vectorizer_path: models.join("vectorizer.json"),
            model_version: default_model_version(),
        }
    }

    /// Defaults overridden by `JOBGUARD_*` variables. Empty values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let body = std::fs::read(path)?;
        let cfg: ScorerConfig = serde_json::from_slice(&body)?;
        if cfg.model_version.trim().is_empty() {
            return Err(CoreError::Config(format!(
                "{}: model_version must not be empty",
                path.display()
            )));
        }
        Ok(cfg)
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get(ENV_MODEL_PATH) {
            self.model_path = PathBuf::from(v);
        }
        if let Some(v) = get(ENV_VECTORIZER_PATH) {
            self.vectorizer_path = PathBuf::from(v);
        }
        if let Some(v) = get(ENV_MODEL_VERSION) {
            self.model_version = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn overrides_replace_only_non_empty_values() {
        let env: HashMap<&str, &str> = [
            (ENV_MODEL_PATH, "/srv/model.json"),
            (ENV_VECTORIZER_PATH, "  "),
            (ENV_MODEL_VERSION, "v2.3"),
        ]
        .into_iter()
        .collect();
        let cfg = ScorerConfig::from_base_dir("/app")
            .with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.model_path, PathBuf::from("/srv/model.json"));
        assert_eq!(cfg.vectorizer_path, PathBuf::from("/app/models/vectorizer.json"));
        assert_eq!(cfg.model_version, "v2.3");
    }

    #[test]
    fn json_config_defaults_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scorer.json");
        std::fs::write(
            &path,
            r#"{"model_path":"m.json","vectorizer_path":"v.json"}"#,
        )
        .unwrap();
        let cfg = ScorerConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.model_version, DEFAULT_MODEL_VERSION);
    }
}
