use jobguard_core::classifier::artifacts::sha256_hex;
use jobguard_core::eval::registry::GateDef;
use jobguard_core::eval::runner::{render_gate_report_csv, run_gate, EvalRunner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // gate_runner scores every embedded scenario and prints stable gate IDs
    // with PASS/FAIL. Optional argv[1]: path for a CSV copy of the results.
    // Exits non-zero on any BLOCKER failure or unstable output.
    let csv_path = std::env::args().nth(1);

    let eval = match EvalRunner::new_v1() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("registry error: {}", e);
            std::process::exit(2);
        }
    };
    info!(
        registry = %eval.registry.registry_version,
        gates = eval.registry.gates.len(),
        "running scoring gates"
    );

    let mut unstable = false;
    for gate in &eval.registry.gates {
        match output_fingerprints(gate) {
            (Some(a), Some(b)) if a != b => {
                println!(
                    "DETERMINISM {} FAIL (sha256 {} != {})",
                    gate.gate_id, a, b
                );
                unstable = true;
            }
            _ => {}
        }
    }

    let results = eval.run_all();
    let mut any_blocker_fail = false;
    for g in &results {
        println!("GATE {} {} {}", g.gate_id, g.result, g.message);
        if g.is_blocking_failure() {
            any_blocker_fail = true;
        }
    }

    if let Some(path) = csv_path {
        let written = render_gate_report_csv(&results)
            .map_err(|e| e.to_string())
            .and_then(|csv| std::fs::write(&path, csv).map_err(|e| e.to_string()));
        if let Err(e) = written {
            error!(path = %path, error = %e, "could not write gate report");
            std::process::exit(1);
        }
    }

    if any_blocker_fail || unstable {
        std::process::exit(1);
    }
}

/// Scores the gate twice; identical inputs must give byte-identical JSON.
fn output_fingerprints(gate: &GateDef) -> (Option<String>, Option<String>) {
    let once = || {
        let (outcome, _) = run_gate(gate);
        outcome
            .ok()
            .and_then(|report| serde_json::to_vec(&report).ok())
            .map(|bytes| sha256_hex(&bytes))
    };
    (once(), once())
}
