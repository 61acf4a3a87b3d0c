use jobguard_core::eval::registry::{registry_v1, REGISTRY_VERSION_V1};
use jobguard_core::eval::runner::{render_gate_report_csv, EvalRunner};

#[test]
fn embedded_registry_parses() {
    let reg = registry_v1().unwrap();
    assert_eq!(reg.registry_version, REGISTRY_VERSION_V1);
    assert!(!reg.gates.is_empty());
    let mut ids: Vec<&str> = reg.gates.iter().map(|g| g.gate_id.as_str()).collect();
    let n = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n, "gate ids must be unique");
}

#[test]
fn all_embedded_gates_pass() {
    let runner = EvalRunner::new_v1().unwrap();
    let results = runner.run_all();
    let failures: Vec<String> = results
        .iter()
        .filter(|r| r.result != "PASS")
        .map(|r| format!("{}: {}", r.gate_id, r.message))
        .collect();
    assert!(failures.is_empty(), "failing gates: {:#?}", failures);
}

#[test]
fn results_are_sorted_by_gate_id() {
    let results = EvalRunner::new_v1().unwrap().run_all();
    let ids: Vec<&str> = results.iter().map(|r| r.gate_id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn csv_report_lists_every_gate() {
    let results = EvalRunner::new_v1().unwrap().run_all();
    let csv = render_gate_report_csv(&results).unwrap();
    assert_eq!(csv.lines().count(), results.len() + 1);
    assert!(csv.starts_with("gate_id,severity,result,message\n"));
}
