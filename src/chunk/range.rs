//! Chunk descriptors.

use std::fmt;
use std::ops::Range;

use super::Chunk;
use crate::source::ReadAt;

/// A contiguous byte range of a source, and its position among its siblings.
///
/// Descriptors are plain values. They carry no reference to the source and
/// can be computed, stored, and compared independently of any I/O.
///
/// # Example
///
/// ```
/// use splitread::ByteRange;
///
/// let range = ByteRange::new(2, 512, 256);
/// assert_eq!(range.end(), 768);
/// assert_eq!(range.range(), 512..768);
///
/// let data = vec![7u8; 1024];
/// let mut chunk = range.bind(&data);
/// assert_eq!(chunk.data()?.len(), 256);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteRange {
    /// 0-based position among sibling chunks, in source order.
    pub index: usize,

    /// Byte offset from the start of the source.
    pub offset: u64,

    /// Number of bytes covered.
    pub size: u64,
}

impl ByteRange {
    /// Creates a new descriptor.
    pub const fn new(index: usize, offset: u64, size: u64) -> Self {
        Self {
            index,
            offset,
            size,
        }
    }

    /// Returns the end offset (exclusive), clamped to `u64::MAX`.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }

    /// Returns the descriptor as a range of source offsets.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Returns true if the range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Binds the descriptor to a source, producing a readable [`Chunk`].
    ///
    /// The chunk starts with its cursor at the beginning of the range.
    pub fn bind<S: ReadAt>(self, source: S) -> Chunk<S> {
        Chunk::new(self, source)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ByteRange#{}({} bytes @ {})",
            self.index, self.size, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_and_range() {
        let range = ByteRange::new(3, 100, 5);
        assert_eq!(range.end(), 105);
        assert_eq!(range.range(), 100..105);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_end_saturates() {
        let range = ByteRange::new(0, u64::MAX, 10);
        assert_eq!(range.end(), u64::MAX);
        assert_eq!(range.range(), u64::MAX..u64::MAX);
    }

    #[test]
    fn test_empty() {
        assert!(ByteRange::new(0, 0, 0).is_empty());
    }

    #[test]
    fn test_display() {
        let s = ByteRange::new(3, 524032, 768).to_string();
        assert_eq!(s, "ByteRange#3(768 bytes @ 524032)");
    }

    #[test]
    fn test_ordering_follows_index() {
        let a = ByteRange::new(0, 0, 10);
        let b = ByteRange::new(1, 10, 10);
        assert!(a < b);
    }

    #[test]
    fn test_bind() {
        let data: Vec<u8> = (0..20).collect();
        let chunk = ByteRange::new(1, 10, 10).bind(data.as_slice());
        assert_eq!(chunk.index(), 1);
        assert_eq!(chunk.offset(), 10);
        assert_eq!(chunk.size(), 10);
    }
}
