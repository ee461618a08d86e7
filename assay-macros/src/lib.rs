//! Procedural macros for assay
//!
//! - `describe!` groups tests into a module
//! - `test!` defines a libtest test that runs against an `assay::TestCase`

use proc_macro::TokenStream;

mod describe;
mod test_macro;
mod utils;

/// Group related tests, similar to Jest's describe blocks
///
/// # Example
///
/// ```rust,ignore
/// use assay::{describe, test};
///
/// describe!("Cart", {
///     test!("starts empty", fn(t) {
///         assay::check_equals(t, Cart::new().len(), 0);
///     });
/// });
/// ```
///
/// This expands to `mod cart { use super::*; ... }`.
#[proc_macro]
pub fn describe(input: TokenStream) -> TokenStream {
    describe::describe_impl(input)
}

/// Define a test case with a `TestCase` host
///
/// The parameter receives `&mut assay::TestCase`. Failed checks are counted
/// and fail the test once the body returns; a failed assertion stops it on
/// the spot.
///
/// # Examples
///
/// ```rust,ignore
/// test!("parses numbers", fn(t) {
///     assay::assert_ok(t, &"42".parse::<i32>());
/// });
///
/// test!("needs no host", fn() {
///     assert!(true);
/// });
/// ```
#[proc_macro]
pub fn test(input: TokenStream) -> TokenStream {
    test_macro::test_impl(input)
}
