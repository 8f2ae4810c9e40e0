//! Configuration loading for Madhya

use crate::error::{PlannerError, Result};
use crate::planning::DirectionSign;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MadhyaConfig {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Planner defaults used when a scenario leaves them out
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    /// Number of centerline steps to compute (default: 10)
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Traversal orientation, 1 or -1 (default: -1)
    #[serde(default)]
    pub direction: DirectionSign,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            direction: DirectionSign::default(),
        }
    }
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory for SVG visualizations
    #[serde(default = "default_svg_dir")]
    pub svg_dir: String,

    /// Write the SVG after every run
    #[serde(default)]
    pub write_svg: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_dir: default_svg_dir(),
            write_svg: false,
        }
    }
}

fn default_steps() -> usize {
    10
}
fn default_svg_dir() -> String {
    "output".to_string()
}

impl MadhyaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::Config(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: MadhyaConfig = toml::from_str(content)?;
        if config.planner.steps == 0 {
            return Err(PlannerError::Config(
                "planner.steps must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
