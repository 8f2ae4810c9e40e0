//! Separating lines and the half-plane filter.
//!
//! Every directional step splits the plane with a line and keeps only the
//! markers on the forward side of it. Vertical lines are carried explicitly
//! instead of as infinite slopes.

use crate::core::Point2D;

use super::direction::DirectionSign;

/// Slope of a separating line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    /// Finite slope dy/dx
    Finite(f32),
    /// Line parallel to the Y axis
    Vertical,
}

/// Separating line used to filter candidate markers.
///
/// For a finite slope the line is `y = slope * x + intercept`. For a
/// vertical line `intercept` holds its x-coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparatingLine {
    pub slope: Slope,
    pub intercept: f32,
}

impl SeparatingLine {
    /// Line connecting a matched left/right pair, anchored on the left point.
    ///
    /// Returns `None` when the two points coincide.
    pub fn connecting(left: Point2D, right: Point2D) -> Option<Self> {
        let Point2D { x: dx, y: dy } = left - right;

        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let k = dy / dx;
        if !k.is_finite() {
            return Some(Self {
                slope: Slope::Vertical,
                intercept: left.x,
            });
        }

        Some(Self {
            slope: Slope::Finite(k),
            intercept: left.y - k * left.x,
        })
    }

    /// Perpendicular to the segment `previous -> latest`, through `latest`.
    ///
    /// Returns `None` when the two points coincide.
    pub fn perpendicular(latest: Point2D, previous: Point2D) -> Option<Self> {
        let Point2D { x: dx, y: dy } = latest - previous;

        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        if dx == 0.0 {
            // Vertical segment: horizontal separator
            return Some(Self {
                slope: Slope::Finite(0.0),
                intercept: latest.y,
            });
        }

        let base = dy / dx;
        let k = -1.0 / base;
        if !k.is_finite() {
            // Horizontal segment: vertical separator
            return Some(Self {
                slope: Slope::Vertical,
                intercept: latest.x,
            });
        }

        Some(Self {
            slope: Slope::Finite(k),
            intercept: latest.y - k * latest.x,
        })
    }

    /// Half-plane test: is `point` on the forward side for `direction`?
    ///
    /// Finite slope: `sign(y - k*x - c) == sign(k) * direction`.
    /// Vertical: `sign(x - c) == -direction`. Points on a sloped or vertical
    /// line never qualify; a horizontal line admits only the points on it.
    #[inline]
    pub fn is_forward(&self, point: &Point2D, direction: DirectionSign) -> bool {
        match self.slope {
            Slope::Finite(k) => {
                sign(point.y - k * point.x - self.intercept) == sign(k) * direction.value()
            }
            Slope::Vertical => sign(point.x - self.intercept) == -direction.value(),
        }
    }

    /// Iterate over the points of `set` on the forward side.
    pub fn forward_points<'a>(
        &'a self,
        set: &'a [Point2D],
        direction: DirectionSign,
    ) -> impl Iterator<Item = Point2D> + 'a {
        set.iter()
            .copied()
            .filter(move |p| self.is_forward(p, direction))
    }
}

/// Sign of a value with `sign(0) == 0`.
#[inline]
fn sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
