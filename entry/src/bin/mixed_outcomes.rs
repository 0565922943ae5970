// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Fixture binary with one failing and one passing assertion, used by
//! the protocol tests to pin the failure path and exit status.

use std::process::ExitCode;

use microtest::{check, unit_test};

#[unit_test]
fn failing_comparison() {
    check!(1 > 2);
}

#[unit_test]
fn passing_comparison() {
    check!(2 > 1);
}

fn main() -> ExitCode {
    microtest::harness_main()
}
