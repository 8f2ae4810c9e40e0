//! Per-step observation hooks.
//!
//! The planner reports each completed step to an optional observer so
//! diagnostics never live in the planner state itself.

use crate::core::Point2D;

use super::direction::DirectionSign;
use super::line::SeparatingLine;

/// Snapshot of one completed step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    /// 1-based step index
    pub step: usize,
    /// Separating line used for filtering (`None` for the seed step)
    pub line: Option<SeparatingLine>,
    /// Orientation in effect for this step, after any reversal
    pub direction: DirectionSign,
    /// Whether the orientation flipped on this step
    pub flipped: bool,
    /// Selected left marker
    pub left: Point2D,
    /// Selected right marker
    pub right: Point2D,
    /// Centerline point appended by this step
    pub center: Point2D,
}

/// Receives one callback per completed step.
pub trait StepObserver {
    fn on_step(&mut self, record: &StepRecord);
}

impl<F: FnMut(&StepRecord)> StepObserver for F {
    fn on_step(&mut self, record: &StepRecord) {
        self(record)
    }
}

/// Collects every step record of a run.
#[derive(Clone, Debug, Default)]
pub struct StepHistory {
    pub records: Vec<StepRecord>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Separating lines in step order (seed step excluded)
    pub fn lines(&self) -> Vec<SeparatingLine> {
        self.records.iter().filter_map(|r| r.line).collect()
    }

    /// Orientation in effect at each step
    pub fn directions(&self) -> Vec<DirectionSign> {
        self.records.iter().map(|r| r.direction).collect()
    }

    /// Step indices where the orientation flipped
    pub fn flips(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|r| r.flipped)
            .map(|r| r.step)
            .collect()
    }
}

impl StepObserver for StepHistory {
    fn on_step(&mut self, record: &StepRecord) {
        self.records.push(record.clone());
    }
}
