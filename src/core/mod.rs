//! Core geometric types.

mod point;

pub use point::Point2D;
