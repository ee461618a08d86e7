//! Hosts for running assertions
//!
//! - [`TestCase`] plugs into libtest: checks are counted, fatal assertions
//!   unwind, and output goes to captured standard output
//! - [`Recorder`] only records, for testing assertion helpers
//! - [`run`] wraps a test body in a `TestCase` (what `test!` expands to)
//!
//! # Example
//!
//! ```rust,ignore
//! use assay::{describe, test};
//!
//! describe!("Parser", {
//!     test!("reads numbers", fn(t) {
//!         let parsed = "42".parse::<i32>();
//!         assay::assert_ok(t, &parsed);
//!         assay::check_equals(t, parsed.ok(), Some(42));
//!     });
//! });
//! ```

mod case;
mod recorder;

pub use case::TestCase;
pub use recorder::Recorder;

std::thread_local! {
    /// Name of the test running on this thread (set by `run`)
    static CURRENT_TEST_NAME: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Set the current test name
pub fn set_current_test_name(name: Option<String>) {
    CURRENT_TEST_NAME.with(|cell| {
        *cell.borrow_mut() = name;
    });
}

/// Name of the test running on this thread, if any
pub fn current_test_name() -> Option<String> {
    CURRENT_TEST_NAME.with(|cell| cell.borrow().clone())
}

/// Clears the current test name, also when the body unwinds
struct NameGuard;

impl Drop for NameGuard {
    fn drop(&mut self) {
        set_current_test_name(None);
    }
}

/// Run `body` against a fresh [`TestCase`] reporting to standard output.
///
/// # Panics
///
/// Panics when any check failed, or unwinds from the first failed
/// assertion, which is how libtest learns the test failed.
pub fn run<F>(name: &str, body: F)
where
    F: FnOnce(&mut TestCase),
{
    set_current_test_name(Some(name.to_string()));
    let _guard = NameGuard;

    let mut case = TestCase::new(name);
    body(&mut case);

    if let Err(err) = case.finish() {
        panic!("{err}");
    }
}
