//! Common test utilities for purposeviz integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated purpose directory and home directory, plus CLI runner
//! - Assertion macros: `assert_report_contains!`, `assert_no_report!`, `assert_success!`
//! - Fixtures: Reusable purpose file contents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
