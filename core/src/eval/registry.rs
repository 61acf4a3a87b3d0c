use crate::classifier::ClassifierVerdict;
use crate::error::{CoreError, CoreResult};
use crate::policy::types::{RiskLevel, Verdict};
use crate::validator::RawPosting;
use serde::{Deserialize, Serialize};

pub const REGISTRY_VERSION_V1: &str = "scoring_gates_v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRegistry {
    pub registry_version: String,
    pub gates: Vec<GateDef>,
}

/// One scripted scoring scenario and what it must produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDef {
    pub gate_id: String,
    pub category: String,
    pub severity: String, // BLOCKER|MAJOR
    pub posting: RawPosting,
    /// Verdict the stub classifier returns; `None` simulates missing artifacts.
    pub classifier: Option<ClassifierVerdict>,
    pub expect: GateExpectation,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpectedError {
    MISSING_FIELD,
    DESCRIPTION_TOO_SHORT,
    MODEL_UNAVAILABLE,
    PREDICTION_ERROR,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateExpectation {
    #[serde(default)]
    pub error: Option<ExpectedError>,
    #[serde(default)]
    pub result: Option<Verdict>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub warning: Option<bool>,
    #[serde(default)]
    pub red_flag_count: Option<usize>,
    #[serde(default)]
    pub red_flags_include: Vec<String>,
    /// Whether the classifier may be consulted at all.
    #[serde(default = "default_true")]
    pub classifier_called: bool,
}

fn default_true() -> bool {
    true
}

pub fn registry_v1() -> CoreResult<GateRegistry> {
    let json = include_str!("registry_v1.json");
    let reg: GateRegistry = serde_json::from_str(json)?;
    if reg.registry_version != REGISTRY_VERSION_V1 {
        return Err(CoreError::Config(format!(
            "embedded registry is not {}",
            REGISTRY_VERSION_V1
        )));
    }
    Ok(reg)
}
