pub mod report;

use crate::classifier::{load_artifacts, ArtifactPair, PostingClassifier};
use crate::config::ScorerConfig;
use crate::error::CoreResult;
use crate::policy::fusion::fuse;
use crate::redflags::detector::RedFlagDetector;
use crate::validator::{validate, RawPosting};
use report::{HealthReport, RiskAssessment, ScoreReport};
use tracing::{debug, debug_span};
use ulid::Ulid;

/// Validator, red-flag detector, classifier and fusion policy wired together.
///
/// Holds no mutable state; share it behind an `Arc` across request handlers.
pub struct ScoringEngine<C: PostingClassifier> {
    classifier: C,
    detector: RedFlagDetector,
    model_version: String,
}

impl<C: PostingClassifier> ScoringEngine<C> {
    pub fn new(classifier: C, model_version: impl Into<String>) -> Self {
        Self {
            classifier,
            detector: RedFlagDetector::new(),
            model_version: model_version.into(),
        }
    }

    pub fn with_detector(mut self, detector: RedFlagDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Validates the posting and scores it. Invalid input never reaches the classifier.
    pub fn score(&self, raw: &RawPosting) -> CoreResult<ScoreReport> {
        let scan_id = format!("s_{}", Ulid::new());
        let _span = debug_span!("score_posting", %scan_id).entered();

        let posting = validate(raw)?;
        let assessment = self.score_text(&posting.combined_text())?;
        Ok(ScoreReport::new(self.model_version.clone(), assessment))
    }

    /// Scores already-assembled posting text without field validation.
    pub fn score_text(&self, text: &str) -> CoreResult<RiskAssessment> {
        let red_flags = self.detector.detect(text);
        let verdict = self.classifier.classify(text)?;
        let outcome = fuse(verdict.label, verdict.confidence, &red_flags);

        debug!(
            model_result = verdict.label.as_str(),
            confidence = verdict.confidence,
            red_flags = red_flags.len(),
            final_result = outcome.final_result.as_str(),
            risk_level = outcome.risk_level.as_str(),
            "posting scored"
        );

        Ok(RiskAssessment {
            final_result: outcome.final_result,
            model_result: verdict.label,
            confidence: verdict.confidence,
            red_flags,
            risk_level: outcome.risk_level,
            warning: outcome.warning,
        })
    }
}

impl ScoringEngine<ArtifactPair> {
    pub fn from_config(config: &ScorerConfig) -> Self {
        Self::new(load_artifacts(config), config.model_version.clone())
    }

    pub fn health(&self) -> HealthReport {
        HealthReport::for_artifacts(&self.model_version, &self.classifier)
    }
}
