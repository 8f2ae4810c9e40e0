//! Properties every planner run must satisfy, checked across scenarios.

use madhya_path::io::Scenario;
use madhya_path::{
    CenterlinePlanner, DirectionSign, PlannerError, Point2D, RunStatus, StepHistory,
};
use std::path::Path;

const SCENARIOS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/integration/scenarios");

fn load_all() -> Vec<Scenario> {
    let mut scenarios: Vec<Scenario> = std::fs::read_dir(SCENARIOS_DIR)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .map(|path| Scenario::load(&path).unwrap())
        .collect();
    scenarios.sort_by(|a, b| a.name.cmp(&b.name));
    scenarios
}

fn assert_no_duplicates(points: &[Point2D], label: &str) {
    for (i, p) in points.iter().enumerate() {
        assert!(
            !points[i + 1..].contains(p),
            "{}: duplicate ({}, {})",
            label,
            p.x,
            p.y
        );
    }
}

#[test]
fn test_run_invariants_hold_for_every_step_count() {
    for scenario in load_all() {
        let left = scenario.left_markers();
        let right = scenario.right_markers();
        let direction = scenario.direction.unwrap_or_default();

        for steps in 1..=8 {
            let mut planner = CenterlinePlanner::new(scenario.start, direction);
            let mut history = StepHistory::new();
            let result = planner
                .run_with_observer(&left, &right, steps, &mut history)
                .unwrap();

            assert!(result.completed_steps <= steps, "{}", scenario.name);
            assert_eq!(result.centerline.len(), result.completed_steps + 1);
            assert_eq!(result.centerline[0], scenario.start);
            assert_eq!(history.records.len(), result.completed_steps);

            if result.status == RunStatus::Completed {
                assert_eq!(result.completed_steps, steps, "{}", scenario.name);
            }

            assert!(result.matched_left.iter().all(|p| left.contains(p)));
            assert!(result.matched_right.iter().all(|p| right.contains(p)));
            assert_no_duplicates(&result.matched_left, &scenario.name);
            assert_no_duplicates(&result.matched_right, &scenario.name);

            for record in &history.records {
                let expected = Point2D::midpoint(&record.left, &record.right);
                assert_eq!(result.centerline[record.step], expected);
                assert_eq!(record.center, expected);
            }
        }
    }
}

#[test]
fn test_exhaustion_keeps_partial_path() {
    let left = [
        Point2D::new(0.0, 1.0),
        Point2D::new(2.0, 1.0),
        Point2D::new(4.0, 1.0),
    ];
    let right = [
        Point2D::new(0.0, -1.0),
        Point2D::new(2.0, -1.0),
        Point2D::new(4.0, -1.0),
    ];
    let mut planner = CenterlinePlanner::new(Point2D::ZERO, DirectionSign::Negative);

    let result = planner.run(&left, &right, 5).unwrap();

    assert_eq!(result.status, RunStatus::PathExhausted);
    assert!(result.centerline.len() <= 4);
    assert_eq!(result.centerline.last(), Some(&Point2D::new(4.0, 0.0)));
}

#[test]
fn test_zero_steps_rejected_without_mutation() {
    let path = Path::new(SCENARIOS_DIR).join("straight_corridor.yaml");
    let scenario = Scenario::load(&path).unwrap();
    let mut planner = CenterlinePlanner::new(scenario.start, DirectionSign::Negative);

    let err = planner
        .run(&scenario.left_markers(), &scenario.right_markers(), 0)
        .unwrap_err();

    assert!(matches!(err, PlannerError::InvalidStepCount { .. }));
    assert_eq!(planner.centerline(), &[scenario.start]);
    assert!(planner.matched_left().is_empty());
    assert!(planner.matched_right().is_empty());
}

#[test]
fn test_reset_and_rerun_is_identical() {
    for scenario in load_all() {
        let left = scenario.left_markers();
        let right = scenario.right_markers();
        let direction = scenario.direction.unwrap_or_default();
        let steps = scenario.steps.unwrap_or(10);

        let mut planner = CenterlinePlanner::default();
        planner.reset(scenario.start, direction);
        let first = planner.run(&left, &right, steps).unwrap();
        let first_direction = planner.direction();

        planner.reset(scenario.start, direction);
        let second = planner.run(&left, &right, steps).unwrap();

        assert_eq!(first, second, "{}", scenario.name);
        assert_eq!(first_direction, planner.direction());
    }
}
