//! The test context assertions report into

use std::io::Write;

/// Per-test handle owned by the surrounding test framework
///
/// Assertions only ever mark the test failed and write their message to
/// [`Host::output`]; the host decides what failing and aborting mean.
///
/// # Example
///
/// ```rust,ignore
/// struct Quiet { failed: bool, out: std::io::Sink }
///
/// impl Host for Quiet {
///     fn fail(&mut self) { self.failed = true; }
///     fn fail_now(&mut self) { panic!("aborted"); }
///     fn output(&mut self) -> &mut dyn Write { &mut self.out }
/// }
/// ```
pub trait Host {
    /// Mark the test failed and let it continue
    fn fail(&mut self);

    /// Mark the test failed and stop it.
    ///
    /// Implementations usually unwind; a host that returns instead must make
    /// sure the caller does not keep running the test.
    fn fail_now(&mut self);

    /// Sink that receives decorated failure messages
    fn output(&mut self) -> &mut dyn Write;
}
