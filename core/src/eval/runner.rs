use crate::classifier::{ClassifierVerdict, PostingClassifier};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::eval::registry::{registry_v1, ExpectedError, GateDef, GateRegistry};
use crate::scoring::report::ScoreReport;
use crate::scoring::ScoringEngine;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed verdict, or `ModelUnavailable` when built without one.
#[derive(Debug, Default)]
pub struct StaticClassifier {
    verdict: Option<ClassifierVerdict>,
    calls: AtomicUsize,
}

impl StaticClassifier {
    pub fn new(verdict: Option<ClassifierVerdict>) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostingClassifier for StaticClassifier {
    fn classify(&self, _text: &str) -> CoreResult<ClassifierVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict.ok_or_else(|| {
            CoreError::ModelUnavailable("static classifier has no verdict".to_string())
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRunResult {
    pub gate_id: String,
    pub result: String, // PASS|FAIL
    pub severity: String,
    pub message: String,
}

impl GateRunResult {
    pub fn is_blocking_failure(&self) -> bool {
        self.severity == "BLOCKER" && self.result != "PASS"
    }
}

pub struct EvalRunner {
    pub registry: GateRegistry,
}

impl EvalRunner {
    pub fn new_v1() -> CoreResult<Self> {
        Ok(Self {
            registry: registry_v1()?,
        })
    }

    pub fn run_all(&self) -> Vec<GateRunResult> {
        let mut results: Vec<GateRunResult> =
            self.registry.gates.iter().map(evaluate_gate).collect();
        results.sort_by(|a, b| a.gate_id.cmp(&b.gate_id));
        results
    }
}

/// Scores the gate's posting with its scripted verdict.
pub fn run_gate(gate: &GateDef) -> (CoreResult<ScoreReport>, usize) {
    let engine = ScoringEngine::new(StaticClassifier::new(gate.classifier), "eval");
    let outcome = engine.score(&gate.posting);
    (outcome, engine.classifier().calls())
}

pub fn evaluate_gate(gate: &GateDef) -> GateRunResult {
    let (outcome, calls) = run_gate(gate);
    let (result, message) = match check_expectations(gate, outcome, calls) {
        Ok(()) => ("PASS".to_string(), "ok".to_string()),
        Err(msg) => ("FAIL".to_string(), msg),
    };
    GateRunResult {
        gate_id: gate.gate_id.clone(),
        result,
        severity: gate.severity.clone(),
        message,
    }
}

fn error_kind(err: &CoreError) -> Option<ExpectedError> {
    match err {
        CoreError::InvalidInput(ValidationError::MissingField { .. }) => {
            Some(ExpectedError::MISSING_FIELD)
        }
        CoreError::InvalidInput(ValidationError::DescriptionTooShort { .. }) => {
            Some(ExpectedError::DESCRIPTION_TOO_SHORT)
        }
        CoreError::ModelUnavailable(_) => Some(ExpectedError::MODEL_UNAVAILABLE),
        CoreError::PredictionError(_) => Some(ExpectedError::PREDICTION_ERROR),
        _ => None,
    }
}

fn check_expectations(
    gate: &GateDef,
    outcome: CoreResult<ScoreReport>,
    calls: usize,
) -> Result<(), String> {
    let expect = &gate.expect;
    if !expect.classifier_called && calls > 0 {
        return Err(format!("classifier called {} time(s), expected none", calls));
    }

    let report = match (outcome, expect.error) {
        (Err(e), Some(want)) => {
            return match error_kind(&e) {
                Some(got) if got == want => Ok(()),
                _ => Err(format!("expected {:?}, got error: {}", want, e)),
            };
        }
        (Err(e), None) => return Err(format!("unexpected error: {}", e)),
        (Ok(_), Some(want)) => return Err(format!("expected {:?}, scoring succeeded", want)),
        (Ok(report), None) => report,
    };

    let a = &report.assessment;
    if let Some(want) = expect.result {
        if a.final_result != want {
            return Err(format!("result {:?} != {:?}", a.final_result, want));
        }
    }
    if let Some(want) = expect.risk_level {
        if a.risk_level != want {
            return Err(format!("risk_level {:?} != {:?}", a.risk_level, want));
        }
    }
    if let Some(want) = expect.warning {
        if a.warning.is_some() != want {
            return Err(format!("warning present={} expected {}", a.warning.is_some(), want));
        }
    }
    if let Some(want) = expect.red_flag_count {
        if a.red_flags.len() != want {
            return Err(format!(
                "red flag count {} != {} ({})",
                a.red_flags.len(),
                want,
                a.red_flags.as_slice().join(", ")
            ));
        }
    }
    let missing: Vec<&str> = expect
        .red_flags_include
        .iter()
        .map(String::as_str)
        .filter(|label| !a.red_flags.contains(label))
        .collect();
    if !missing.is_empty() {
        return Err(format!("missing red flags: {}", missing.join(", ")));
    }
    Ok(())
}

pub fn render_gate_report_csv(results: &[GateRunResult]) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(["gate_id", "severity", "result", "message"])?;
    for r in results {
        wtr.write_record([
            r.gate_id.as_str(),
            r.severity.as_str(),
            r.result.as_str(),
            r.message.as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}
