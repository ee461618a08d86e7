//! A host that records instead of failing
//!
//! Useful for testing assertion helpers themselves: nothing unwinds, the
//! failure flags and the decorated output are kept for inspection.

use std::io::Write;

use crate::host::Host;

#[derive(Debug, Default)]
pub struct Recorder {
    failures: usize,
    fatal: bool,
    out: Vec<u8>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        self.failures > 0
    }

    /// Whether a fatal assertion asked to stop the test
    pub fn fatal(&self) -> bool {
        self.fatal
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Everything written so far, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl Host for Recorder {
    fn fail(&mut self) {
        self.failures += 1;
    }

    fn fail_now(&mut self) {
        self.failures += 1;
        self.fatal = true;
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}
