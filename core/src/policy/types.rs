use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    REAL,
    FAKE,
}

impl Verdict {
    /// Class index used by the trained model: REAL = 0, FAKE = 1.
    pub fn prediction(self) -> u8 {
        match self {
            Verdict::REAL => 0,
            Verdict::FAKE => 1,
        }
    }

    pub fn from_prediction(class: u8) -> Option<Self> {
        match class {
            0 => Some(Verdict::REAL),
            1 => Some(Verdict::FAKE),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::REAL => "REAL",
            Verdict::FAKE => "FAKE",
        }
    }
}

/// Ordered LOW < MEDIUM < HIGH.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    LOW,
    MEDIUM,
    HIGH,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::LOW => "LOW",
            RiskLevel::MEDIUM => "MEDIUM",
            RiskLevel::HIGH => "HIGH",
        }
    }
}
