//! Scenario loading and SVG export.
//!
//! ## Scenarios
//!
//! ```rust,ignore
//! use madhya_path::io::Scenario;
//! use std::path::Path;
//!
//! let scenario = Scenario::load(Path::new("scenarios/corridor.yaml"))?;
//! let left = scenario.left_markers();
//! ```
//!
//! ## SVG Visualization
//!
//! ```rust,ignore
//! use madhya_path::io::{CenterlineSvg, SvgConfig};
//!
//! CenterlineSvg::new(SvgConfig::default())
//!     .with_title("Corridor")
//!     .with_boundaries(&left, &right)
//!     .with_centerline(&result.centerline)
//!     .save(Path::new("corridor.svg"))?;
//! ```

pub mod scenario;
pub mod svg;

pub use scenario::{Expectation, Scenario, SvgOutputConfig};
pub use svg::{CenterlineSvg, SvgColorScheme, SvgConfig};
