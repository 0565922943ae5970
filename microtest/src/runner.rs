// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The run phase: walk the registry once and report.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::registry::Registry;
use crate::report::{self, TestStats};

/// Run every registered test exactly once, in registration order.
///
/// Before each invocation the test's name is printed followed by
/// `... ` (stdout flushed, no newline); the assertion macros inside
/// the body then append their verdict lines. After the walk the
/// summary line is printed and the final [`TestStats`] returned.
///
/// There is no isolation between tests: a panic in one body aborts
/// the whole run.
///
/// # Example
/// ```no_run
/// let registry = microtest::Registry::collect();
/// let stats = microtest::run_all(&registry);
/// assert!(stats.all_passed());
/// ```
pub fn run_all(registry: &Registry) -> TestStats {
    report::reset();

    if registry.is_empty() {
        warn!("registry is empty, nothing to run");
    }

    for test in registry.iter() {
        debug!("running test `{}`", test.name());
        print!("{}... ", test.name());
        let _ = io::stdout().flush();
        test.invoke();
    }

    let stats = report::snapshot();
    println!("{}", stats.summary());
    stats
}

/// Run all tests and return whether every assertion passed.
pub fn run_all_ok(registry: &Registry) -> bool {
    run_all(registry).all_passed()
}

/// Full collect-run-report cycle for use from `fn main()`.
///
/// Installs the harness logger, snapshots every `#[unit_test]`
/// declaration, runs them all, and maps the outcome to the process
/// exit status.
pub fn harness_main() -> ExitCode {
    crate::logger::init();
    let registry = Registry::collect();
    run_all(&registry).exit_code()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serial_test::serial;

    use super::*;

    static ORDER: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

    fn trace_a() {
        ORDER.lock().unwrap().push("a");
        crate::check!(true);
    }

    fn trace_b() {
        ORDER.lock().unwrap().push("b");
        crate::check!(true);
    }

    fn one_pass() {
        crate::check!(1 + 1 == 2);
    }

    fn one_fail() {
        crate::check!(1 > 2);
    }

    fn no_assertions() {}

    #[test]
    #[serial]
    fn runs_every_test_once_in_order() {
        ORDER.lock().unwrap().clear();
        let mut registry = Registry::new();
        registry.register("trace_a", trace_a);
        registry.register("trace_b", trace_b);

        let stats = run_all(&registry);
        assert_eq!(*ORDER.lock().unwrap(), ["a", "b"]);
        assert_eq!(
            stats,
            TestStats {
                passed: 2,
                failed: 0
            }
        );
    }

    #[test]
    #[serial]
    fn empty_registry_reports_no_tests() {
        let registry = Registry::new();
        let stats = run_all(&registry);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.summary(), "No tests found");
        assert!(run_all_ok(&registry));
    }

    #[test]
    #[serial]
    fn single_passing_test_summary() {
        let mut registry = Registry::new();
        registry.register("one_pass", one_pass);
        let stats = run_all(&registry);
        assert_eq!(stats.summary(), "1 tests passed, 0 tests failed");
        assert!(stats.all_passed());
    }

    #[test]
    #[serial]
    fn mixed_outcomes_fail_the_run() {
        let mut registry = Registry::new();
        registry.register("one_fail", one_fail);
        registry.register("one_pass", one_pass);

        let stats = run_all(&registry);
        assert_eq!(stats.summary(), "1 tests passed, 1 tests failed");
        assert!(!stats.all_passed());
        assert!(!run_all_ok(&registry));
    }

    // A body with zero assertions leaves the summary on the "No tests
    // found" branch: the total counts assertions, not tests.
    #[test]
    #[serial]
    fn assertion_count_drives_the_summary() {
        let mut registry = Registry::new();
        registry.register("no_assertions", no_assertions);

        let stats = run_all(&registry);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.summary(), "No tests found");
        assert!(stats.all_passed());
    }

    #[test]
    #[serial]
    fn rerun_is_idempotent() {
        let mut registry = Registry::new();
        registry.register("one_pass", one_pass);
        registry.register("one_fail", one_fail);

        let first = run_all(&registry);
        let second = run_all(&registry);
        assert_eq!(first, second);
    }
}
