//! Error types for Madhya

use thiserror::Error;

/// Which boundary set an input point came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Madhya error type
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid step count {requested}: at least one step is required")]
    InvalidStepCount { requested: usize },

    #[error("Invalid {side} marker at index {index}: coordinates must be finite")]
    InvalidPoint { side: Side, index: usize },

    #[error("Degenerate geometry at step {step}: defining points coincide")]
    GeometryDegenerate { step: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PlannerError {
    fn from(e: toml::de::Error) -> Self {
        PlannerError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for PlannerError {
    fn from(e: serde_yaml::Error) -> Self {
        PlannerError::Scenario(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
