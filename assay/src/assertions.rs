//! Assertions and checks
//!
//! `assert*` functions stop the test on failure, `check*` functions let it
//! keep going. All of them are silent when the condition holds.

use std::fmt::{self, Debug, Display};

use crate::decorate::{decorate_and_log, CallSite};
use crate::host::Host;
use crate::testing::current_test_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Fatal,
    NonFatal,
}

#[track_caller]
fn report<H: Host + ?Sized>(host: &mut H, severity: Severity, msg: fmt::Arguments<'_>) {
    decorate_and_log(host.output(), msg);

    let site = CallSite::caller();
    let test = current_test_name();
    tracing::debug!(
        target: "assay",
        file = site.map_or("???", |s| s.file),
        line = site.map_or(1, |s| s.line),
        fatal = severity == Severity::Fatal,
        test = test.as_deref().unwrap_or(""),
        "assertion failed"
    );

    match severity {
        Severity::Fatal => host.fail_now(),
        Severity::NonFatal => host.fail(),
    }
}

/// Fail the test and stop it if `condition` is false
///
/// # Example
///
/// ```rust,ignore
/// assay::assert(t, user.id > 0, format_args!("bad id {}", user.id));
/// ```
#[track_caller]
pub fn assert<H: Host + ?Sized>(host: &mut H, condition: bool, msg: fmt::Arguments<'_>) {
    if !condition {
        report(host, Severity::Fatal, msg);
    }
}

/// Fail the test if `condition` is false, then carry on
#[track_caller]
pub fn check<H: Host + ?Sized>(host: &mut H, condition: bool, msg: fmt::Arguments<'_>) {
    if !condition {
        report(host, Severity::NonFatal, msg);
    }
}

/// Fail the test and stop it if `result` holds an error
#[track_caller]
pub fn assert_ok<H, T, E>(host: &mut H, result: &Result<T, E>)
where
    H: Host + ?Sized,
    E: Display,
{
    if let Err(err) = result {
        report(host, Severity::Fatal, format_args!("unexpected error: {err}"));
    }
}

/// Fail the test if `result` holds an error, then carry on
#[track_caller]
pub fn check_ok<H, T, E>(host: &mut H, result: &Result<T, E>)
where
    H: Host + ?Sized,
    E: Display,
{
    if let Err(err) = result {
        report(host, Severity::NonFatal, format_args!("unexpected error: {err}"));
    }
}

/// Fail the test and stop it unless `expected == actual`
///
/// Both sides must have the same type; nothing is coerced.
///
/// ```rust,compile_fail
/// let mut t = assay::TestCase::new("strict");
/// assay::assert_equals(&mut t, 1u8, 1u16);
/// ```
#[track_caller]
pub fn assert_equals<H, T>(host: &mut H, expected: T, actual: T)
where
    H: Host + ?Sized,
    T: PartialEq + Debug,
{
    if expected != actual {
        report(
            host,
            Severity::Fatal,
            format_args!("\n\texp: {expected:?}\n\tgot: {actual:?}"),
        );
    }
}

/// Fail the test unless `expected == actual`, then carry on
#[track_caller]
pub fn check_equals<H, T>(host: &mut H, expected: T, actual: T)
where
    H: Host + ?Sized,
    T: PartialEq + Debug,
{
    if expected != actual {
        report(
            host,
            Severity::NonFatal,
            format_args!("\n\texp: {expected:?}\n\tgot: {actual:?}"),
        );
    }
}
