//! Formatting front-ends for [`assert`](crate::assert) and [`check`](crate::check)
//!
//! ```rust,ignore
//! assay::check!(t, total == 3, "total was {total}");
//! assay::assert_that!(t, file.exists(), "{} is missing", file.display());
//! assay::check!(t, items.is_empty());
//! ```

/// Fail the test and stop it if the condition is false
///
/// Without a message, the condition's source text is reported.
#[macro_export]
macro_rules! assert_that {
    ($host:expr, $cond:expr $(,)?) => {
        $crate::assert(
            $host,
            $cond,
            ::core::format_args!("assertion failed: {}", ::core::stringify!($cond)),
        )
    };
    ($host:expr, $cond:expr, $($arg:tt)+) => {
        $crate::assert($host, $cond, ::core::format_args!($($arg)+))
    };
}

/// Fail the test if the condition is false, then carry on
///
/// Without a message, the condition's source text is reported.
#[macro_export]
macro_rules! check {
    ($host:expr, $cond:expr $(,)?) => {
        $crate::check(
            $host,
            $cond,
            ::core::format_args!("check failed: {}", ::core::stringify!($cond)),
        )
    };
    ($host:expr, $cond:expr, $($arg:tt)+) => {
        $crate::check($host, $cond, ::core::format_args!($($arg)+))
    };
}
