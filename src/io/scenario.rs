//! Scenario YAML parsing.
//!
//! A scenario bundles one planner run:
//! - Left and right boundary markers
//! - Start point, direction and step count
//! - Optional expected outcome for regression checks
//! - SVG output configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::Point2D;
use crate::error::{PlannerError, Result};
use crate::planning::{DirectionSign, RunResult, RunStatus};

/// Tolerance for comparing expected and computed coordinates (meters)
const POINT_TOLERANCE: f32 = 1e-5;

/// A planner scenario loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Seed point of the centerline
    #[serde(default)]
    pub start: Point2D,

    /// Traversal orientation (falls back to config)
    #[serde(default)]
    pub direction: Option<DirectionSign>,

    /// Requested step count (falls back to config)
    #[serde(default)]
    pub steps: Option<usize>,

    /// Left boundary markers as `[x, y]` pairs
    #[serde(default)]
    pub left: Vec<[f32; 2]>,

    /// Right boundary markers as `[x, y]` pairs
    #[serde(default)]
    pub right: Vec<[f32; 2]>,

    /// Expected outcome
    #[serde(default)]
    pub expected: Option<Expectation>,

    /// SVG output configuration
    #[serde(default)]
    pub svg_output: SvgOutputConfig,
}

/// Expected outcome of a scenario run. Omitted fields are not checked.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(default)]
    pub status: Option<RunStatus>,

    #[serde(default)]
    pub completed_steps: Option<usize>,

    #[serde(default)]
    pub centerline: Option<Vec<[f32; 2]>>,

    #[serde(default)]
    pub matched_left: Option<Vec<[f32; 2]>>,

    #[serde(default)]
    pub matched_right: Option<Vec<[f32; 2]>>,

    /// Orientation after the run
    #[serde(default)]
    pub final_direction: Option<DirectionSign>,
}

/// SVG output configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SvgOutputConfig {
    /// Output filename (default: scenario name + .svg)
    #[serde(default)]
    pub filename: Option<String>,

    /// Scale: pixels per meter
    #[serde(default = "default_svg_scale")]
    pub scale: f32,
}

impl Default for SvgOutputConfig {
    fn default() -> Self {
        Self {
            filename: None,
            scale: default_svg_scale(),
        }
    }
}

fn default_svg_scale() -> f32 {
    50.0
}

impl Scenario {
    /// Load scenario from YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Scenario(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        if scenario.steps == Some(0) {
            return Err(PlannerError::Scenario(format!(
                "{}: steps must be at least 1",
                scenario.name
            )));
        }
        Ok(scenario)
    }

    /// Left boundary markers
    pub fn left_markers(&self) -> Vec<Point2D> {
        self.left.iter().copied().map(Point2D::from).collect()
    }

    /// Right boundary markers
    pub fn right_markers(&self) -> Vec<Point2D> {
        self.right.iter().copied().map(Point2D::from).collect()
    }

    /// SVG filename for this scenario
    pub fn svg_filename(&self) -> String {
        self.svg_output
            .filename
            .clone()
            .unwrap_or_else(|| format!("{}.svg", self.name))
    }
}

impl Expectation {
    /// Compare a run against the expectation.
    ///
    /// Returns one message per mismatch; empty means the run matches.
    pub fn mismatches(&self, result: &RunResult, final_direction: DirectionSign) -> Vec<String> {
        let mut mismatches = Vec::new();

        if let Some(status) = self.status
            && status != result.status
        {
            mismatches.push(format!(
                "status: expected {:?}, got {:?}",
                status, result.status
            ));
        }

        if let Some(steps) = self.completed_steps
            && steps != result.completed_steps
        {
            mismatches.push(format!(
                "completed_steps: expected {}, got {}",
                steps, result.completed_steps
            ));
        }

        if let Some(direction) = self.final_direction
            && direction != final_direction
        {
            mismatches.push(format!(
                "final_direction: expected {}, got {}",
                direction, final_direction
            ));
        }

        let sequences = [
            ("centerline", &self.centerline, &result.centerline),
            ("matched_left", &self.matched_left, &result.matched_left),
            ("matched_right", &self.matched_right, &result.matched_right),
        ];
        for (label, expected, actual) in sequences {
            if let Some(expected) = expected {
                compare_points(label, expected, actual, &mut mismatches);
            }
        }

        mismatches
    }
}

fn compare_points(label: &str, expected: &[[f32; 2]], actual: &[Point2D], out: &mut Vec<String>) {
    if expected.len() != actual.len() {
        out.push(format!(
            "{}: expected {} points, got {}",
            label,
            expected.len(),
            actual.len()
        ));
        return;
    }

    for (i, (&[x, y], p)) in expected.iter().zip(actual).enumerate() {
        if (p.x - x).abs() > POINT_TOLERANCE || (p.y - y).abs() > POINT_TOLERANCE {
            out.push(format!(
                "{}[{}]: expected ({}, {}), got ({}, {})",
                label, i, x, y, p.x, p.y
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
name: "corridor"
start: { x: 0.0, y: 0.0 }
direction: -1
steps: 3
left: [[0.0, 1.0], [2.0, 1.0]]
right: [[0.0, -1.0], [2.0, -1.0]]
expected:
  status: path_exhausted
  centerline: [[0.0, 0.0], [0.0, 0.0], [2.0, 0.0]]
"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_yaml(YAML).unwrap();
        assert_eq!(scenario.name, "corridor");
        assert_eq!(scenario.direction, Some(DirectionSign::Negative));
        assert_eq!(scenario.steps, Some(3));
        assert_eq!(scenario.left_markers()[1], Point2D::new(2.0, 1.0));
        assert_eq!(scenario.right_markers().len(), 2);
        assert_eq!(scenario.svg_filename(), "corridor.svg");

        let expected = scenario.expected.unwrap();
        assert_eq!(expected.status, Some(RunStatus::PathExhausted));
        assert!(expected.matched_left.is_none());
    }

    #[test]
    fn test_defaults() {
        let scenario = Scenario::from_yaml("name: bare\n").unwrap();
        assert_eq!(scenario.start, Point2D::ZERO);
        assert!(scenario.direction.is_none());
        assert!(scenario.steps.is_none());
        assert!(scenario.left.is_empty());
        assert_eq!(scenario.svg_output.scale, 50.0);
    }

    #[test]
    fn test_rejects_zero_steps() {
        let err = Scenario::from_yaml("name: zero\nsteps: 0\n").unwrap_err();
        assert!(matches!(err, PlannerError::Scenario(_)));
    }

    #[test]
    fn test_rejects_bad_direction() {
        let err = Scenario::from_yaml("name: bad\ndirection: 3\n").unwrap_err();
        assert!(matches!(err, PlannerError::Scenario(_)));
    }

    #[test]
    fn test_mismatches() {
        let expectation = Expectation {
            status: Some(RunStatus::Completed),
            centerline: Some(vec![[0.0, 0.0], [1.0, 0.0]]),
            ..Default::default()
        };
        let result = RunResult {
            centerline: vec![Point2D::ZERO, Point2D::new(1.0, 0.5)],
            matched_left: Vec::new(),
            matched_right: Vec::new(),
            status: RunStatus::PathExhausted,
            completed_steps: 1,
        };

        let mismatches = expectation.mismatches(&result, DirectionSign::Negative);
        assert_eq!(mismatches.len(), 2);
        assert!(mismatches[0].starts_with("status"));
        assert!(mismatches[1].starts_with("centerline[1]"));
    }
}
