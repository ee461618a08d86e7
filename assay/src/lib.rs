//! Source-located assertions for Rust tests
//!
//! Six helpers wrap a condition, an error or an equality check. When the
//! condition does not hold they print one highlighted `file:line: message`
//! to the host's output and fail the test, either fatally (`assert*`) or
//! letting it continue (`check*`).
//!
//! # Example
//!
//! ```rust,ignore
//! use assay::testing;
//!
//! #[test]
//! fn totals() {
//!     testing::run("totals", |t| {
//!         assay::check_equals(t, cart.total(), 30);
//!         assay::assert_ok(t, &cart.checkout());
//!         assay::check!(t, cart.is_empty(), "cart still has {} items", cart.len());
//!     });
//! }
//! ```

pub mod assertions;
pub mod decorate;
mod error;
pub mod host;
mod macros;
pub mod testing;

pub use assertions::{assert, assert_equals, assert_ok, check, check_equals, check_ok};
pub use error::TestError;
pub use host::Host;
pub use testing::TestCase;

// Re-export test macros
pub use assay_macros::{describe, test};
