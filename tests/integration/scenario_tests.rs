//! YAML-based scenario tests
//!
//! Runs every scenario in `tests/integration/scenarios` and compares the
//! result with its `expected` block.
//!
//! # Adding New Scenarios
//!
//! Create a new `.yaml` file in `tests/integration/scenarios/` with:
//!
//! ```yaml
//! name: "my_scenario"
//! start: { x: 0.0, y: 0.0 }
//! direction: -1
//! steps: 3
//! left: [[0.0, 1.0], [2.0, 1.0]]
//! right: [[0.0, -1.0], [2.0, -1.0]]
//! expected:
//!   status: completed
//!   centerline: [[0.0, 0.0], [0.0, 0.0], [2.0, 0.0]]
//! ```

use madhya_path::io::Scenario;
use madhya_path::{CenterlinePlanner, DirectionSign, RunResult};
use std::path::Path;

const SCENARIOS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/integration/scenarios");

/// Run a scenario file and return its result and final direction
fn run_scenario(path: &Path) -> (Scenario, RunResult, DirectionSign) {
    let scenario = Scenario::load(path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));

    let mut planner = CenterlinePlanner::new(
        scenario.start,
        scenario.direction.unwrap_or_default(),
    );
    let result = planner
        .run(
            &scenario.left_markers(),
            &scenario.right_markers(),
            scenario.steps.unwrap_or(10),
        )
        .unwrap_or_else(|e| panic!("Scenario {} failed: {}", scenario.name, e));

    (scenario, result, planner.direction())
}

/// Run a single scenario by filename (without .yaml extension)
fn run_single_scenario(name: &str) {
    let path = Path::new(SCENARIOS_DIR).join(format!("{}.yaml", name));
    let (scenario, result, direction) = run_scenario(&path);

    println!("\n--- Running scenario: {} ---", scenario.name);
    println!("Status: {:?}, steps: {}", result.status, result.completed_steps);

    let expected = scenario
        .expected
        .as_ref()
        .unwrap_or_else(|| panic!("Scenario {} has no expected block", name));
    let mismatches = expected.mismatches(&result, direction);
    assert!(
        mismatches.is_empty(),
        "Scenario {} mismatches:\n  {}",
        name,
        mismatches.join("\n  ")
    );
}

#[test]
fn test_straight_corridor() {
    run_single_scenario("straight_corridor");
}

#[test]
fn test_corridor_exhaustion() {
    run_single_scenario("corridor_exhaustion");
}

#[test]
fn test_diagonal_reversal() {
    run_single_scenario("diagonal_reversal");
}

#[test]
fn test_reverse_corridor() {
    run_single_scenario("reverse_corridor");
}

#[test]
fn test_unordered_markers() {
    run_single_scenario("unordered_markers");
}

#[test]
fn test_curved_track() {
    run_single_scenario("curved_track");
}

#[test]
fn test_lateral_seed() {
    run_single_scenario("lateral_seed");
}

#[test]
fn test_all_scenarios_parse() {
    let mut count = 0;
    for entry in std::fs::read_dir(SCENARIOS_DIR).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            let scenario = Scenario::load(&path).unwrap();
            assert!(!scenario.name.is_empty(), "{} has no name", path.display());
            count += 1;
        }
    }
    assert!(count >= 7);
}
