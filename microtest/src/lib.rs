// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Minimal self-registering unit-test harness.
//!
//! Test functions mark themselves with the [`unit_test`] attribute and
//! are collected into a process-wide registry before the program's
//! main logic begins. [`harness_main`] walks the registry in
//! registration order, runs every test, and reports the pass/fail
//! tally recorded by the [`check!`] family of macros.
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! #[microtest::unit_test]
//! fn addition() {
//!     microtest::check_eq!(2 + 2, 4);
//! }
//!
//! fn main() -> ExitCode {
//!     microtest::harness_main()
//! }
//! ```

#[macro_use]
extern crate log;

pub mod logger;
pub mod registry;
pub mod report;
pub mod runner;

// Re-export the unit_test attribute from the macros crate
pub use macros::unit_test;
// Re-export the runner entry points
pub use runner::{harness_main, run_all, run_all_ok};
// Re-export hidden helper functions for the assertion macros
// These are used internally by check!/check_eq!/check_ne! and should not be called directly
#[doc(hidden)]
pub use report::{__log_check_eq_failure, __log_check_ne_failure, __record_check};
// Re-export commonly used types
pub use registry::{Registry, TESTS, TestDescriptor, TestFn};
pub use report::TestStats;

#[doc(hidden)]
pub mod __private {
    pub use linkme::{self, distributed_slice};
}
