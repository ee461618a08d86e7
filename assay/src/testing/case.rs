//! `TestCase`: a [`Host`] for plain libtest tests

use std::io::{self, Write};

use crate::error::TestError;
use crate::host::Host;

/// Standard output routed through `print!`, so libtest captures it
struct CapturedStdout;

impl Write for CapturedStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        print!("{}", String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Failure state of one running test
///
/// Non-fatal checks are counted and reported by [`TestCase::finish`];
/// a fatal assertion unwinds immediately with [`TestError::Aborted`].
pub struct TestCase {
    name: String,
    failures: usize,
    out: Box<dyn Write + Send>,
}

impl TestCase {
    /// Create a test case that reports to standard output
    ///
    /// Output goes through `print!` so libtest can capture it per test. Like
    /// `print!`, this panics if standard output itself fails, for example
    /// when running with `--nocapture` into a closed pipe. Use
    /// [`TestCase::with_output`] where that matters.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_output(name, CapturedStdout)
    }

    /// Create a test case that reports to the given sink
    pub fn with_output(name: impl Into<String>, out: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            failures: 0,
            out: Box::new(out),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any check or assertion failed so far
    pub fn failed(&self) -> bool {
        self.failures > 0
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    fn flush_output(&mut self) {
        if let Err(err) = self.out.flush() {
            tracing::warn!(target: "assay", test = %self.name, error = %err, "could not flush test output");
        }
    }

    /// Close the test case, turning recorded check failures into an error
    pub fn finish(mut self) -> Result<(), TestError> {
        self.flush_output();
        if self.failures == 0 {
            return Ok(());
        }
        Err(TestError::ChecksFailed {
            name: self.name,
            count: self.failures,
        })
    }
}

impl Host for TestCase {
    fn fail(&mut self) {
        self.failures += 1;
    }

    fn fail_now(&mut self) {
        self.failures += 1;
        self.flush_output();
        panic!(
            "{}",
            TestError::Aborted {
                name: self.name.clone()
            }
        );
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}
