use crate::policy::types::{RiskLevel, Verdict};
use crate::redflags::RedFlagSet;
use serde::{Deserialize, Serialize};

/// Flag count at which the classifier verdict is overridden to FAKE.
pub const OVERRIDE_FLAG_COUNT: usize = 4;
/// Flag count at which risk is HIGH regardless of the classifier.
pub const HIGH_RISK_FLAG_COUNT: usize = 3;
/// A FAKE verdict at or above this confidence is HIGH risk even without flags.
pub const FAKE_HIGH_CONFIDENCE: f64 = 70.0;
/// A REAL verdict with a single flag below this confidence is MEDIUM risk.
pub const REAL_LOW_CONFIDENCE: f64 = 75.0;

pub const OVERRIDE_WARNING: &str = "Multiple scam indicators found. Classified as FAKE for safety.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FusionOutcome {
    pub final_result: Verdict,
    pub risk_level: RiskLevel,
    pub warning: Option<String>,
}

/// Reconciles the classifier verdict with red-flag evidence.
///
/// The risk level is always computed from the untouched `model_result`, so an
/// override to FAKE does not feed back into it.
pub fn fuse(model_result: Verdict, confidence: f64, red_flags: &RedFlagSet) -> FusionOutcome {
    let flags = red_flags.len();
    let (final_result, warning) = if flags >= OVERRIDE_FLAG_COUNT {
        (Verdict::FAKE, Some(OVERRIDE_WARNING.to_string()))
    } else {
        (model_result, None)
    };
    FusionOutcome {
        final_result,
        risk_level: risk_level_for(model_result, confidence, flags),
        warning,
    }
}

pub fn risk_level_for(model_result: Verdict, confidence: f64, flag_count: usize) -> RiskLevel {
    if flag_count >= HIGH_RISK_FLAG_COUNT {
        return RiskLevel::HIGH;
    }

    match model_result {
        Verdict::FAKE => {
            if flag_count >= 1 || confidence >= FAKE_HIGH_CONFIDENCE {
                RiskLevel::HIGH
            } else {
                RiskLevel::MEDIUM
            }
        }
        Verdict::REAL => {
            if flag_count == 2 {
                RiskLevel::MEDIUM
            } else if flag_count == 1 && confidence < REAL_LOW_CONFIDENCE {
                RiskLevel::MEDIUM
            } else {
                RiskLevel::LOW
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_without_flags_depends_on_confidence() {
        assert_eq!(risk_level_for(Verdict::FAKE, 69.99, 0), RiskLevel::MEDIUM);
        assert_eq!(risk_level_for(Verdict::FAKE, 70.0, 0), RiskLevel::HIGH);
    }

    #[test]
    fn real_with_one_flag_depends_on_confidence() {
        assert_eq!(risk_level_for(Verdict::REAL, 74.99, 1), RiskLevel::MEDIUM);
        assert_eq!(risk_level_for(Verdict::REAL, 75.0, 1), RiskLevel::LOW);
    }

    #[test]
    fn real_with_two_flags_is_medium_at_any_confidence() {
        assert_eq!(risk_level_for(Verdict::REAL, 99.9, 2), RiskLevel::MEDIUM);
    }

    #[test]
    fn override_keeps_model_based_risk() {
        let flags: RedFlagSet = ["deposit", "whatsapp", "telegram", "hurry up", "click here"]
            .into_iter()
            .collect();
        let out = fuse(Verdict::REAL, 99.0, &flags);
        assert_eq!(out.final_result, Verdict::FAKE);
        assert_eq!(out.risk_level, RiskLevel::HIGH);
        assert_eq!(out.warning.as_deref(), Some(OVERRIDE_WARNING));
    }
}
