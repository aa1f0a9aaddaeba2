//! Error types for splitread.
//!
//! Only construction can fail with a [`ReaderError`]. Once a reader exists,
//! every range it hands out is well-formed, and the per-chunk operations
//! return the source's own [`std::io::Error`] untouched.

use std::fmt;

/// Errors raised while building a [`ConcurrentReader`](crate::ConcurrentReader)
/// or validating a [`ReaderConfig`](crate::ReaderConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    /// The total size of the source was negative.
    NegativeSize {
        /// The size that was given.
        size: i64,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The number of chunks does not fit in `usize` on this platform.
    TooManyChunks {
        /// The number of chunks the partition would need.
        count: u64,
    },
}

impl ReaderError {
    /// Returns true if the error was caused by an invalid argument.
    ///
    /// All variants currently belong to this class; the method exists so
    /// callers can branch on the class instead of matching every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ReaderError::NegativeSize { .. }
                | ReaderError::InvalidConfig { .. }
                | ReaderError::TooManyChunks { .. }
        )
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::NegativeSize { size } => {
                write!(f, "invalid argument: size should not be negative: {}", size)
            }
            ReaderError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            ReaderError::TooManyChunks { count } => {
                write!(f, "invalid argument: {} chunks do not fit in memory", count)
            }
        }
    }
}

impl std::error::Error for ReaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_negative_size() {
        let err = ReaderError::NegativeSize { size: -1 };
        assert!(err.to_string().contains("size should not be negative: -1"));
    }

    #[test]
    fn test_display_invalid_config() {
        let err = ReaderError::InvalidConfig {
            message: "chunk size must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid config: chunk size must be at least 1"
        );
    }

    #[test]
    fn test_invalid_argument_class() {
        assert!(ReaderError::NegativeSize { size: -5 }.is_invalid_argument());
        assert!(ReaderError::TooManyChunks { count: u64::MAX }.is_invalid_argument());
    }
}
