//! Centerline planning between paired boundary markers.
//!
//! This module provides:
//! - Separating lines with an explicit vertical case
//! - Direction sign and the reversal heuristic
//! - The stepping planner and its per-step observer hooks

mod direction;
mod line;
mod observer;
mod planner;

pub use direction::{DirectionSign, next_direction};
pub use line::{SeparatingLine, Slope};
pub use observer::{StepHistory, StepObserver, StepRecord};
pub use planner::{CenterlinePlanner, RunResult, RunStatus, select_nearest};
