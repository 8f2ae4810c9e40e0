//! Centerline planner for corridors bounded by left/right markers.
//!
//! Each step matches one left and one right marker and appends their
//! midpoint to the centerline:
//!
//! 1. Seed step: nearest markers to the start point, no filtering.
//! 2. First directional step: filter by the line connecting the seed pair.
//! 3. Later steps: filter by the perpendicular to the last centerline
//!    segment, flipping orientation when two consecutive separating lines
//!    share a slope.
//!
//! A run ends early, without error, once either side has no marker left on
//! the forward side of the separating line, or when the last centerline
//! segment has zero length and so defines no perpendicular.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{PlannerError, Result, Side};

use super::direction::{DirectionSign, next_direction};
use super::line::{SeparatingLine, Slope};
use super::observer::{StepObserver, StepRecord};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// All requested steps were taken
    Completed,
    /// Ran out of forward markers; the partial centerline is valid
    PathExhausted,
}

/// Result of a planner run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Centerline, starting with the seed point
    pub centerline: Vec<Point2D>,
    /// Left markers in selection order
    pub matched_left: Vec<Point2D>,
    /// Right markers in selection order
    pub matched_right: Vec<Point2D>,
    /// Completion status
    pub status: RunStatus,
    /// Number of steps taken
    pub completed_steps: usize,
}

/// Outcome of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StepOutcome {
    Advanced,
    Exhausted,
}

/// Current and previous separating line.
#[derive(Clone, Copy, Debug, Default)]
struct LineState {
    current: Option<SeparatingLine>,
    previous_slope: Option<Slope>,
}

impl LineState {
    fn advance(&mut self, line: SeparatingLine) {
        self.previous_slope = self.current.map(|l| l.slope);
        self.current = Some(line);
    }
}

/// Incremental centerline planner.
///
/// Each call to [`run`](Self::run) restarts from the seed, so back-to-back
/// runs without [`reset`](Self::reset) recompute the path instead of extending it.
#[derive(Clone, Debug)]
pub struct CenterlinePlanner {
    start: Point2D,
    initial_direction: DirectionSign,
    direction: DirectionSign,
    matched_left: Vec<Point2D>,
    matched_right: Vec<Point2D>,
    centerline: Vec<Point2D>,
    line: LineState,
    completed_steps: usize,
}

impl Default for CenterlinePlanner {
    fn default() -> Self {
        Self::new(Point2D::ZERO, DirectionSign::default())
    }
}

impl CenterlinePlanner {
    /// Create a planner seeded at `start`.
    pub fn new(start: Point2D, direction: DirectionSign) -> Self {
        Self {
            start,
            initial_direction: direction,
            direction,
            matched_left: Vec::new(),
            matched_right: Vec::new(),
            centerline: vec![start],
            line: LineState::default(),
            completed_steps: 0,
        }
    }

    /// Clear all state and reseed at `start`.
    pub fn reset(&mut self, start: Point2D, direction: DirectionSign) {
        self.start = start;
        self.initial_direction = direction;
        self.rewind();
    }

    /// Restore the state left by the last reset.
    fn rewind(&mut self) {
        self.direction = self.initial_direction;
        self.matched_left.clear();
        self.matched_right.clear();
        self.centerline.clear();
        self.centerline.push(self.start);
        self.line = LineState::default();
        self.completed_steps = 0;
    }

    /// Left markers matched so far
    pub fn matched_left(&self) -> &[Point2D] {
        &self.matched_left
    }

    /// Right markers matched so far
    pub fn matched_right(&self) -> &[Point2D] {
        &self.matched_right
    }

    /// Centerline computed so far, seed first
    pub fn centerline(&self) -> &[Point2D] {
        &self.centerline
    }

    /// Current orientation
    pub fn direction(&self) -> DirectionSign {
        self.direction
    }

    /// Steps completed by the last run
    pub fn completed_steps(&self) -> usize {
        self.completed_steps
    }

    /// Separating line of the last directional step
    pub fn separating_line(&self) -> Option<SeparatingLine> {
        self.line.current
    }

    /// Plan up to `steps` centerline points between the two marker sets.
    ///
    /// Every run starts over from the seed and orientation given at the last
    /// reset. Running out of markers is reported through
    /// [`RunStatus::PathExhausted`], not as an error.
    pub fn run(&mut self, left: &[Point2D], right: &[Point2D], steps: usize) -> Result<RunResult> {
        self.run_with_observer(left, right, steps, &mut |_: &StepRecord| {})
    }

    /// Same as [`run`](Self::run), reporting every completed step to `observer`.
    ///
    /// [`PlannerError::GeometryDegenerate`] is only raised when the seed
    /// pair coincides; the partial path stays readable through the accessors.
    pub fn run_with_observer<O: StepObserver + ?Sized>(
        &mut self,
        left: &[Point2D],
        right: &[Point2D],
        steps: usize,
        observer: &mut O,
    ) -> Result<RunResult> {
        if steps < 1 {
            return Err(PlannerError::InvalidStepCount { requested: steps });
        }
        validate_markers(left, Side::Left)?;
        validate_markers(right, Side::Right)?;

        self.rewind();

        let mut status = RunStatus::Completed;
        for step in 1..=steps {
            let outcome = match step {
                1 => self.seed_step(left, right, observer),
                2 => self.connecting_step(left, right, observer)?,
                _ => self.perpendicular_step(left, right, step, observer)?,
            };

            if outcome == StepOutcome::Exhausted {
                tracing::warn!(
                    "Path exhausted after {} of {} steps: no forward markers left",
                    self.completed_steps,
                    steps
                );
                status = RunStatus::PathExhausted;
                break;
            }
        }

        tracing::info!(
            "Centerline planned: {} points, {} left / {} right markers matched",
            self.centerline.len(),
            self.matched_left.len(),
            self.matched_right.len()
        );

        Ok(RunResult {
            centerline: self.centerline.clone(),
            matched_left: self.matched_left.clone(),
            matched_right: self.matched_right.clone(),
            status,
            completed_steps: self.completed_steps,
        })
    }

    /// Step 1: nearest markers to the seed, unfiltered.
    fn seed_step<O: StepObserver + ?Sized>(
        &mut self,
        left: &[Point2D],
        right: &[Point2D],
        observer: &mut O,
    ) -> StepOutcome {
        let reference = self.last_center();
        let (Some(l), Some(r)) = (
            select_nearest(left.iter().copied(), &reference),
            select_nearest(right.iter().copied(), &reference),
        ) else {
            return StepOutcome::Exhausted;
        };

        self.commit(1, None, false, l, r, observer);
        StepOutcome::Advanced
    }

    /// Step 2: filter by the line connecting the seed pair.
    fn connecting_step<O: StepObserver + ?Sized>(
        &mut self,
        left: &[Point2D],
        right: &[Point2D],
        observer: &mut O,
    ) -> Result<StepOutcome> {
        let (seed_left, seed_right) = match (self.matched_left.first(), self.matched_right.first())
        {
            (Some(&l), Some(&r)) => (l, r),
            _ => return Ok(StepOutcome::Exhausted),
        };

        let line = SeparatingLine::connecting(seed_left, seed_right)
            .ok_or(PlannerError::GeometryDegenerate { step: 2 })?;
        self.line.advance(line);

        Ok(self.filtered_step(2, line, false, left, right, observer))
    }

    /// Step n >= 3: filter by the perpendicular to the last centerline segment.
    fn perpendicular_step<O: StepObserver + ?Sized>(
        &mut self,
        left: &[Point2D],
        right: &[Point2D],
        step: usize,
        observer: &mut O,
    ) -> Result<StepOutcome> {
        let n = self.centerline.len();
        // A zero-length last segment has no perpendicular, so nothing is forward.
        let Some(line) =
            SeparatingLine::perpendicular(self.centerline[n - 1], self.centerline[n - 2])
        else {
            tracing::debug!("Step {}: last centerline segment has zero length", step);
            return Ok(StepOutcome::Exhausted);
        };
        self.line.advance(line);

        let direction = next_direction(self.line.previous_slope, line.slope, self.direction);
        let flipped = direction != self.direction;
        if flipped {
            tracing::info!(
                "Direction reversed at step {}: {} -> {}",
                step,
                self.direction,
                direction
            );
            self.direction = direction;
        }

        Ok(self.filtered_step(step, line, flipped, left, right, observer))
    }

    /// Select the nearest forward marker on each side and commit the pair.
    fn filtered_step<O: StepObserver + ?Sized>(
        &mut self,
        step: usize,
        line: SeparatingLine,
        flipped: bool,
        left: &[Point2D],
        right: &[Point2D],
        observer: &mut O,
    ) -> StepOutcome {
        let reference = self.last_center();
        let l = select_nearest(line.forward_points(left, self.direction), &reference);
        let r = select_nearest(line.forward_points(right, self.direction), &reference);

        match (l, r) {
            (Some(l), Some(r)) => {
                self.commit(step, Some(line), flipped, l, r, observer);
                StepOutcome::Advanced
            }
            _ => StepOutcome::Exhausted,
        }
    }

    /// Record a matched pair and append its midpoint.
    fn commit<O: StepObserver + ?Sized>(
        &mut self,
        step: usize,
        line: Option<SeparatingLine>,
        flipped: bool,
        left: Point2D,
        right: Point2D,
        observer: &mut O,
    ) {
        if !self.matched_left.contains(&left) {
            self.matched_left.push(left);
        }
        if !self.matched_right.contains(&right) {
            self.matched_right.push(right);
        }

        let center = Point2D::midpoint(&left, &right);
        self.centerline.push(center);
        self.completed_steps += 1;

        debug_assert_eq!(self.centerline.len(), self.completed_steps + 1);
        debug_assert!(self.matched_left.len() <= self.completed_steps);
        debug_assert!(self.matched_right.len() <= self.completed_steps);

        tracing::debug!(
            "Step {}: left ({:.3}, {:.3}), right ({:.3}, {:.3}) -> center ({:.3}, {:.3})",
            step,
            left.x,
            left.y,
            right.x,
            right.y,
            center.x,
            center.y
        );

        observer.on_step(&StepRecord {
            step,
            line,
            direction: self.direction,
            flipped,
            left,
            right,
            center,
        });
    }

    #[inline]
    fn last_center(&self) -> Point2D {
        *self.centerline.last().unwrap_or(&self.start)
    }
}

/// Candidate closest to `reference`; ties go to the earliest candidate.
///
/// `None` means the candidate set was empty.
pub fn select_nearest<I>(candidates: I, reference: &Point2D) -> Option<Point2D>
where
    I: IntoIterator<Item = Point2D>,
{
    let mut best: Option<(Point2D, f32)> = None;

    for candidate in candidates {
        let distance = candidate.distance(reference);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(point, _)| point)
}

/// Reject non-finite marker coordinates.
fn validate_markers(markers: &[Point2D], side: Side) -> Result<()> {
    match markers.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(PlannerError::InvalidPoint { side, index }),
        None => Ok(()),
    }
}
