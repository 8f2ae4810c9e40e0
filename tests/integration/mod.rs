//! Integration tests for madhya-path
//!
//! Runs the planner against YAML scenarios and checks the properties every
//! run must satisfy.
//!
//! # Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test --test integration -- --nocapture
//!
//! # Run a single scenario
//! cargo test --test integration test_straight_corridor
//! ```

mod properties;
mod scenario_tests;
