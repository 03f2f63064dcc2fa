//! Common test utilities for Shipyard CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project, storage and home directories
//! - Fixtures: Reusable configuration builders

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
