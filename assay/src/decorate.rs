//! Failure decoration
//!
//! Attributes a failure message to the source line of the assertion that
//! produced it, highlights it, and writes it to the host's output sink.
//!
//! Every public assertion is `#[track_caller]`, so the location seen here is
//! the line the test author wrote, not a frame inside this crate.

use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::path::Path;

/// Reverse-video bold red
pub const HIGHLIGHT: &str = "\x1b[7;1;31m";

/// Reset attributes and restore the default foreground
pub const RESET: &str = "\x1b[0;39m";

/// Source position a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Base name of the source file, without directories
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Resolve the location of the outermost `#[track_caller]` frame
    #[track_caller]
    pub fn caller() -> Option<Self> {
        Self::from_location(Location::caller())
    }

    /// Reduce a location to its base file name.
    ///
    /// Returns `None` when the recorded path has no usable file name.
    pub fn from_location(location: &'static Location<'static>) -> Option<Self> {
        Some(Self {
            file: base_name(location.file())?,
            line: location.line(),
        })
    }
}

fn base_name(path: &str) -> Option<&str> {
    Path::new(path).file_name()?.to_str()
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Render a failure exactly as it is written to the sink
///
/// An unresolved call site falls back to the ` ???:1` sentinel.
pub fn format_failure(site: Option<CallSite>, msg: fmt::Arguments<'_>) -> String {
    match site {
        Some(site) => format!("{HIGHLIGHT}{site}: {msg}{RESET}\n\n"),
        None => format!("{HIGHLIGHT} ???:1: {msg}{RESET}\n\n"),
    }
}

/// Write one decorated failure line for the caller's call site.
///
/// Never fails: a sink that refuses the write is reported through `tracing`
/// and otherwise ignored.
#[track_caller]
pub fn decorate_and_log(out: &mut dyn Write, msg: fmt::Arguments<'_>) {
    let text = format_failure(CallSite::caller(), msg);

    if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        tracing::warn!(target: "assay", error = %err, "could not write assertion failure");
    }
}
