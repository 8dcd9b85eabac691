//! End-to-end test framework for pw-scaffold
//!
//! This module provides utilities for running the actual CLI binary
//! against a temporary directory and inspecting what it wrote.

pub mod assertions;
pub mod common;

pub use assertions::*;
pub use common::*;
