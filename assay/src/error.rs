//! Test outcome errors

use thiserror::Error;

/// Why a [`TestCase`](crate::TestCase) did not pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestError {
    /// One or more non-fatal checks failed and the test ran to the end
    #[error("test `{name}` failed: {count} check(s) failed")]
    ChecksFailed { name: String, count: usize },

    /// A fatal assertion stopped the test
    #[error("test `{name}` aborted by a failed assertion")]
    Aborted { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let failed = TestError::ChecksFailed {
            name: "sums".to_string(),
            count: 3,
        };
        assert_eq!(failed.to_string(), "test `sums` failed: 3 check(s) failed");

        let aborted = TestError::Aborted {
            name: "sums".to_string(),
        };
        assert_eq!(aborted.to_string(), "test `sums` aborted by a failed assertion");
    }
}
