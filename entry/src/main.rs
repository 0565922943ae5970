// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Demo entry point: a handful of example tests run by the harness.
//!
//! Each `#[unit_test]` function below registers itself at link time;
//! `harness_main` collects them all, runs them in order, and maps the
//! tally to the process exit status.

use std::process::ExitCode;

use microtest::{check, check_eq, check_ne, unit_test};

/// Simple arithmetic check.
#[unit_test]
fn basic_addition() {
    check_eq!(2 + 2, 4);
}

/// String comparison check.
#[unit_test]
fn string_not_equal() {
    check_ne!("hello", "world");
}

/// Multiple assertions in one test body.
#[unit_test]
fn condition_bounds() {
    let value = 42;
    check!(value > 0);
    check!(value < 100);
}

#[unit_test]
fn vec_push() {
    let mut v = Vec::new();
    v.push(1);
    v.push(2);
    v.push(3);
    check_eq!(v.len(), 3);
    check_eq!(v[0], 1);
    check_eq!(v[2], 3);
}

fn main() -> ExitCode {
    microtest::harness_main()
}
