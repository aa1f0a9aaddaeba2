//! Configuration for partitioning behavior.
//!
//! - [`ReaderConfig`] - Chunk size used to split the source
//!
//! # Example
//!
//! ```
//! use splitread::ReaderConfig;
//!
//! // 1 MiB chunks
//! let config = ReaderConfig::new(1024 * 1024)?;
//! assert_eq!(config.chunk_size(), 1024 * 1024);
//!
//! # Ok::<(), splitread::ReaderError>(())
//! ```

use crate::error::ReaderError;

/// Default chunk size (4 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// Configuration for a [`ConcurrentReader`](crate::ConcurrentReader).
///
/// The chunk size is the uniform length of every chunk except possibly the
/// last one, which absorbs the remainder. It must be at least 1.
///
/// A reader copies its configuration at construction; changing the chunk
/// size afterwards requires building a new reader.
///
/// # Example
///
/// ```
/// use splitread::ReaderConfig;
///
/// let config = ReaderConfig::default().with_chunk_size(256);
/// assert!(config.validate().is_ok());
///
/// let config = ReaderConfig::default().with_chunk_size(0);
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderConfig {
    chunk_size: usize,
}

impl ReaderConfig {
    /// Creates a new configuration with the given chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::InvalidConfig`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self, ReaderError> {
        if chunk_size < 1 {
            return Err(ReaderError::InvalidConfig {
                message: "chunk sizes below 1 not allowed",
            });
        }

        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Validation happens in
    /// [`ReaderConfig::validate`] and when the config is handed to a reader.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ReaderError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.chunk_size(), 4 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReaderConfig::default().with_chunk_size(8192);
        assert_eq!(config.chunk_size(), 8192);
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let err = ReaderConfig::new(0).unwrap_err();
        assert!(matches!(err, ReaderError::InvalidConfig { .. }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_smallest_chunk_size() {
        let config = ReaderConfig::new(1).unwrap();
        assert_eq!(config.chunk_size(), 1);
    }

    #[test]
    fn test_validate_after_builder() {
        let config = ReaderConfig::new(16).unwrap().with_chunk_size(0);
        assert!(config.validate().is_err());
    }
}
