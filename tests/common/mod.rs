//! Common test utilities for layerguard integration tests.
//!
//! This module provides:
//! - `TestProject`: isolated project tree in a temp directory
//! - `TestResult`: captured output of a CLI run
//! - Fixtures: reusable Python sources

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
