//! # Madhya: Corridor Centerline Planner
//!
//! Computes a centerline between two unordered sets of boundary markers
//! (left and right), one matched pair at a time. Each step picks the nearest
//! forward marker on both sides and appends their midpoint to the path.
//!
//! ## Quick Start
//!
//! ```rust
//! use madhya_path::{CenterlinePlanner, DirectionSign, Point2D, RunStatus};
//!
//! let left = [Point2D::new(0.0, 1.0), Point2D::new(2.0, 1.0), Point2D::new(4.0, 1.0)];
//! let right = [Point2D::new(0.0, -1.0), Point2D::new(2.0, -1.0), Point2D::new(4.0, -1.0)];
//!
//! let mut planner = CenterlinePlanner::new(Point2D::ZERO, DirectionSign::Negative);
//! let result = planner.run(&left, &right, 3).unwrap();
//!
//! assert_eq!(result.status, RunStatus::Completed);
//! assert_eq!(result.centerline.last(), Some(&Point2D::new(4.0, 0.0)));
//! ```
//!
//! ## Stepping
//!
//! ```text
//!   step 1   nearest left/right to the start point (unfiltered)
//!   step 2   filter by the line through the step-1 pair
//!   step n   filter by the perpendicular to the last centerline segment,
//!            flipping orientation when the slope repeats
//! ```
//!
//! Running out of forward markers ends a run with
//! [`RunStatus::PathExhausted`]; the centerline built so far is valid.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod planning;

pub use crate::core::Point2D;
pub use config::MadhyaConfig;
pub use error::{PlannerError, Result, Side};
pub use planning::{
    CenterlinePlanner, DirectionSign, RunResult, RunStatus, SeparatingLine, Slope, StepHistory,
    StepObserver, StepRecord,
};
