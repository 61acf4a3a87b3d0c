use crate::redflags::lexicon::{RedFlagRule, DEFAULT_RULES};
use crate::redflags::RedFlagSet;
use crate::text::normalize;

/// Scans posting text against a table of red-flag rules.
#[derive(Debug, Clone)]
pub struct RedFlagDetector {
    rules: Vec<RedFlagRule>,
}

impl Default for RedFlagDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RedFlagDetector {
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    pub fn with_rules(rules: Vec<RedFlagRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RedFlagRule] {
        &self.rules
    }

    /// Returns matched labels in rule order. Never fails; blank text yields an empty set.
    pub fn detect(&self, text: &str) -> RedFlagSet {
        let normalized = normalize(text);
        let mut found = RedFlagSet::new();
        if normalized.is_empty() {
            return found;
        }
        for rule in &self.rules {
            if rule.matcher.matches(&normalized) {
                found.insert(rule.label);
            }
        }
        found
    }
}

/// Detects red flags with the built-in rule table.
pub fn detect_red_flags(text: &str) -> RedFlagSet {
    RedFlagDetector::new().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redflags::lexicon::{FlagCategory, Matcher};

    #[test]
    fn overlapping_phrases_are_both_recorded() {
        let flags = detect_red_flags("Part time work from home for students");
        assert_eq!(
            flags.as_slice(),
            ["work from home", "part time work from home"]
        );
    }

    #[test]
    fn custom_rules_with_repeated_labels_collapse() {
        let detector = RedFlagDetector::with_rules(vec![
            RedFlagRule {
                label: "crypto payout",
                category: FlagCategory::PAYMENT_DEMAND,
                matcher: Matcher::Phrase("bitcoin"),
            },
            RedFlagRule {
                label: "crypto payout",
                category: FlagCategory::PAYMENT_DEMAND,
                matcher: Matcher::Phrase("usdt"),
            },
        ]);
        let flags = detector.detect("Salary paid in Bitcoin or USDT");
        assert_eq!(flags.as_slice(), ["crypto payout"]);
    }

    #[test]
    fn matching_happens_after_normalization() {
        let flags = detect_red_flags("URGENT\n\n   HIRING");
        assert_eq!(flags.as_slice(), ["urgent hiring"]);
    }
}
