// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Test registration and the process-wide registry.
//!
//! Tests declared with `#[unit_test]` land in the [`TESTS`] distributed
//! slice at link time. [`Registry::collect`] snapshots that slice into
//! an ordered, append-only sequence before the run phase begins; no
//! entry is ever removed, so traversal order equals registration order.

use linkme::distributed_slice;

/// A test callback: no arguments, no return value.
pub type TestFn = fn();

/// One registered test: a display name paired with its callback.
#[derive(Clone, Copy)]
pub struct TestDescriptor {
    name: &'static str,
    func: TestFn,
    decl_file: &'static str,
    decl_line: u32,
}

impl TestDescriptor {
    /// Create a new test descriptor.
    ///
    /// The name is printed before the test runs and must be supplied
    /// explicitly; the `#[unit_test]` attribute derives it from the
    /// function identifier and records the declaration site
    /// (`file!()`, `line!()`), which orders the collected registry.
    pub const fn new(
        name: &'static str,
        func: TestFn,
        decl_file: &'static str,
        decl_line: u32,
    ) -> Self {
        Self {
            name,
            func,
            decl_file,
            decl_line,
        }
    }

    /// Display name of the test.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the test body.
    pub fn invoke(&self) {
        (self.func)()
    }

    // Ordering key: declaration order within a file, file path order
    // across files.
    pub(crate) fn decl_site(&self) -> (&'static str, u32) {
        (self.decl_file, self.decl_line)
    }
}

/// All tests declared with `#[unit_test]`, gathered at link time.
#[distributed_slice]
pub static TESTS: [TestDescriptor] = [..];

/// The ordered collection of all tests known to the process.
#[derive(Default)]
pub struct Registry {
    entries: Vec<TestDescriptor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot every `#[unit_test]` declaration into a registry, in
    /// declaration order.
    pub fn collect() -> Self {
        let mut registry = Self::new();
        for test in TESTS.iter() {
            registry.entries.push(*test);
        }
        // linkme leaves slice order unspecified; the declaration site
        // restores it.
        registry.entries.sort_by_key(|t| t.decl_site());
        registry
    }

    /// Append a test to the tail of the registry.
    ///
    /// Explicitly registered entries keep their append position; the
    /// declaration-site key only orders entries gathered by
    /// [`Registry::collect`].
    pub fn register(&mut self, name: &'static str, func: TestFn) {
        self.entries.push(TestDescriptor::new(name, func, "", 0));
    }

    /// Number of registered tests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no test has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the registry in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TestDescriptor> {
        self.entries.iter()
    }
}
