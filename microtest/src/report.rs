// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Assertion outcome recording and run statistics.
//!
//! Every `check!`-family invocation prints a one-line verdict on
//! stdout and bumps one of two process-wide counters. The counters are
//! written only during the strictly sequential run phase and read once
//! by the runner to build a [`TestStats`] snapshot.

use core::fmt::Debug;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::process::ExitCode;

static TESTS_PASSED: AtomicUsize = AtomicUsize::new(0);
static TESTS_FAILED: AtomicUsize = AtomicUsize::new(0);

/// Aggregated pass/fail counts for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestStats {
    /// Number of assertions that passed.
    pub passed: usize,
    /// Number of assertions that failed.
    pub failed: usize,
}

impl TestStats {
    /// Empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded assertions.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Whether no assertion failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// The exact summary line printed after a run.
    ///
    /// The "No tests found" branch is driven by the assertion total,
    /// not the test count: a test body containing no assertion leaves
    /// the total at zero.
    pub fn summary(&self) -> String {
        if self.total() == 0 {
            "No tests found".into()
        } else {
            format!("{} tests passed, {} tests failed", self.passed, self.failed)
        }
    }

    /// Process exit status for this run: success iff nothing failed.
    pub fn exit_code(&self) -> ExitCode {
        if self.failed > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Zero both counters. Called by the runner before every walk.
pub(crate) fn reset() {
    TESTS_PASSED.store(0, Ordering::Relaxed);
    TESTS_FAILED.store(0, Ordering::Relaxed);
}

/// Read the counters into a [`TestStats`] snapshot.
pub(crate) fn snapshot() -> TestStats {
    TestStats {
        passed: TESTS_PASSED.load(Ordering::Relaxed),
        failed: TESTS_FAILED.load(Ordering::Relaxed),
    }
}

#[doc(hidden)]
pub fn __record_check(passed: bool) {
    if passed {
        println!("SUCCESS");
        TESTS_PASSED.fetch_add(1, Ordering::Relaxed);
    } else {
        println!("FAILED");
        TESTS_FAILED.fetch_add(1, Ordering::Relaxed);
    }
}

#[doc(hidden)]
pub fn __log_check_eq_failure<L, R>(left: &L, right: &R, file: &str, line: u32)
where
    L: Debug,
    R: Debug,
{
    error!("check_eq failed at {file}:{line}: left = {left:?}, right = {right:?}");
}

#[doc(hidden)]
pub fn __log_check_ne_failure<L, R>(left: &L, right: &R, file: &str, line: u32)
where
    L: Debug,
    R: Debug,
{
    error!("check_ne failed at {file}:{line}: both sides = {left:?}, {right:?}");
}

/// Record one boolean assertion outcome.
///
/// Prints `SUCCESS` or `FAILED` on its own stdout line and increments
/// the matching counter. Performed unconditionally, once per
/// invocation.
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        $crate::__record_check($cond)
    };
}

/// Record one equality assertion, logging both values on failure.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        let passed = *left == *right;
        if !passed {
            $crate::__log_check_eq_failure(left, right, ::core::file!(), ::core::line!());
        }
        $crate::__record_check(passed)
    }};
}

/// Record one inequality assertion, logging both values on failure.
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        let passed = *left != *right;
        if !passed {
            $crate::__log_check_ne_failure(left, right, ::core::file!(), ::core::line!());
        }
        $crate::__record_check(passed)
    }};
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn summary_with_no_assertions() {
        let stats = TestStats::new();
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.summary(), "No tests found");
        assert!(stats.all_passed());
    }

    #[test]
    fn summary_with_counts() {
        let stats = TestStats {
            passed: 3,
            failed: 1,
        };
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.summary(), "3 tests passed, 1 tests failed");
        assert!(!stats.all_passed());
    }

    #[test]
    fn exit_code_tracks_failures() {
        let passing = TestStats {
            passed: 2,
            failed: 0,
        };
        let failing = TestStats {
            passed: 0,
            failed: 1,
        };
        assert_eq!(
            format!("{:?}", passing.exit_code()),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", failing.exit_code()),
            format!("{:?}", ExitCode::FAILURE)
        );
    }

    #[test]
    #[serial]
    fn record_check_updates_counters() {
        reset();
        __record_check(true);
        __record_check(true);
        __record_check(false);
        assert_eq!(
            snapshot(),
            TestStats {
                passed: 2,
                failed: 1
            }
        );

        reset();
        assert_eq!(snapshot(), TestStats::new());
    }

    #[test]
    #[serial]
    fn check_macros_record_one_outcome_each() {
        reset();
        crate::check!(1 + 1 == 2);
        crate::check_eq!("same", "same");
        crate::check_ne!(1, 2);
        crate::check_eq!(1, 2);
        assert_eq!(
            snapshot(),
            TestStats {
                passed: 3,
                failed: 1
            }
        );
    }
}
