//! ConcurrentReader - a source split into fixed-size chunks.
//!
//! The reader computes the chunk layout once, at construction, and hands out
//! freshly bound [`Chunk`]s on demand. It never spawns threads: the chunks are
//! independent, and the caller decides how to process them.
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use splitread::{ConcurrentReader, ReaderConfig};
//!
//! let data: Vec<u8> = (0..1000u32).map(|i| i as u8).collect();
//! let reader = ConcurrentReader::new(&data, 1000, ReaderConfig::new(256)?)?;
//!
//! let total: usize = std::thread::scope(|s| {
//!     let workers: Vec<_> = reader
//!         .chunks()
//!         .into_iter()
//!         .map(|mut chunk| {
//!             s.spawn(move || {
//!                 let mut buf = Vec::new();
//!                 chunk.read_to_end(&mut buf).map(|_| buf.len())
//!             })
//!         })
//!         .collect();
//!     workers.into_iter().map(|w| w.join().unwrap().unwrap()).sum()
//! });
//! assert_eq!(total, 1000);
//! # Ok::<(), splitread::ReaderError>(())
//! ```

use std::io;

use tracing::debug;

use super::layout::partition;
use crate::chunk::{ByteRange, Chunk};
use crate::config::ReaderConfig;
use crate::error::ReaderError;
use crate::source::ReadAt;

/// Splits a [`ReadAt`] source into chunks that can be read concurrently.
///
/// The chunk layout covers `[0, size)` exactly once: every chunk is
/// `chunk_size` bytes except the last, which absorbs the remainder. A source
/// of size 0 has no chunks.
///
/// The chunk size is fixed when the reader is built. Use a new reader for a
/// different layout.
#[derive(Debug, Clone)]
pub struct ConcurrentReader<S> {
    source: S,
    size: u64,
    config: ReaderConfig,
    ranges: Vec<ByteRange>,
}

impl<S: ReadAt> ConcurrentReader<S> {
    /// Creates a reader over `source`, whose total length is `size` bytes.
    ///
    /// `size` must describe the source accurately; it is not checked against
    /// the source, and chunks past the real end simply read short.
    ///
    /// # Errors
    ///
    /// - [`ReaderError::NegativeSize`] if `size < 0`
    /// - [`ReaderError::InvalidConfig`] if the chunk size is zero
    /// - [`ReaderError::TooManyChunks`] if the layout cannot be allocated
    pub fn new(source: S, size: i64, config: ReaderConfig) -> Result<Self, ReaderError> {
        let size = u64::try_from(size).map_err(|_| ReaderError::NegativeSize { size })?;
        config.validate()?;

        let chunk_size = config.chunk_size() as u64;
        let ranges = partition(size, chunk_size)?;

        debug!(
            size,
            chunk_size,
            chunks = ranges.len(),
            "partitioned source"
        );

        Ok(Self {
            source,
            size,
            config,
            ranges,
        })
    }

    /// Creates a reader with the default 4 MiB chunk size.
    pub fn with_default_config(source: S, size: i64) -> Result<Self, ReaderError> {
        Self::new(source, size, ReaderConfig::default())
    }

    /// Binds every chunk to the source, ordered from start to end.
    ///
    /// Each call returns fresh chunks with their cursors at the start of
    /// their ranges. The chunks borrow the source, so they cannot outlive
    /// the reader.
    pub fn chunks(&self) -> Vec<Chunk<&S>> {
        self.ranges
            .iter()
            .map(|range| range.bind(&self.source))
            .collect()
    }

    /// Binds the chunk at `index`, or returns `None` past the last chunk.
    pub fn chunk(&self, index: usize) -> Option<Chunk<&S>> {
        self.ranges.get(index).map(|range| range.bind(&self.source))
    }

    /// Reads directly from the source at `offset`, bypassing the chunk layout.
    ///
    /// Errors and short reads come straight from the source.
    pub fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.source.read_at(buf, offset)
    }
}

impl<S: ReadAt + Clone> ConcurrentReader<S> {
    /// Like [`ConcurrentReader::chunks`], but each chunk holds its own clone
    /// of the source handle.
    ///
    /// With an `Arc` source the chunks are `'static` and can be moved into
    /// spawned tasks.
    pub fn chunks_owned(&self) -> Vec<Chunk<S>> {
        self.ranges
            .iter()
            .map(|range| range.bind(self.source.clone()))
            .collect()
    }
}

impl<S> ConcurrentReader<S> {
    /// Returns the chunk descriptors, ordered from start to end.
    pub fn ranges(&self) -> &[ByteRange] {
        &self.ranges
    }

    /// Returns the number of chunks.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if the source is empty and there are no chunks.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the total size of the source.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Returns a reference to the source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the reader and returns the source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ReadAt> ReadAt for ConcurrentReader<S> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.source.read_at(buf, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CHUNK_SIZE;
    use std::io::Read;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + 13) as u8).collect()
    }

    #[test]
    fn test_negative_size() {
        let err = ConcurrentReader::new(Vec::<u8>::new(), -1, ReaderConfig::default()).unwrap_err();
        assert_eq!(err, ReaderError::NegativeSize { size: -1 });
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_zero_chunk_size() {
        let config = ReaderConfig::default().with_chunk_size(0);
        let err = ConcurrentReader::new(Vec::<u8>::new(), 10, config).unwrap_err();
        assert!(matches!(err, ReaderError::InvalidConfig { .. }));
    }

    #[test]
    fn test_size_checked_before_config() {
        let config = ReaderConfig::default().with_chunk_size(0);
        let err = ConcurrentReader::new(Vec::<u8>::new(), -3, config).unwrap_err();
        assert_eq!(err, ReaderError::NegativeSize { size: -3 });
    }

    #[test]
    fn test_default_chunk_size() {
        let reader = ConcurrentReader::with_default_config(Vec::<u8>::new(), 10 * 1024 * 1024).unwrap();
        assert_eq!(reader.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.ranges()[2].size, 2 * 1024 * 1024);
    }

    #[test]
    fn test_empty_source_has_no_chunks() {
        let reader = ConcurrentReader::with_default_config(Vec::<u8>::new(), 0).unwrap();
        assert!(reader.is_empty());
        assert!(reader.chunks().is_empty());
        assert!(reader.chunk(0).is_none());
    }

    #[test]
    fn test_chunks_are_fresh_each_call() {
        let data = pattern(100);
        let reader = ConcurrentReader::new(&data, 100, ReaderConfig::new(30).unwrap()).unwrap();

        let mut first = reader.chunks();
        let mut buf = [0u8; 10];
        first[0].read_exact(&mut buf).unwrap();

        let second = reader.chunks();
        assert_eq!(first[0].position(), 10);
        assert_eq!(second[0].position(), 0);
        assert_eq!(
            first.iter().map(Chunk::descriptor).collect::<Vec<_>>(),
            second.iter().map(Chunk::descriptor).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_chunk_by_index() {
        let data = pattern(100);
        let reader = ConcurrentReader::new(&data, 100, ReaderConfig::new(30).unwrap()).unwrap();

        let mut last = reader.chunk(3).unwrap();
        assert_eq!(last.offset(), 90);
        assert_eq!(&last.data().unwrap()[..], &data[90..]);
        assert!(reader.chunk(4).is_none());
    }

    #[test]
    fn test_read_at_passthrough() {
        let data = pattern(100);
        let reader = ConcurrentReader::new(data.clone(), 100, ReaderConfig::new(30).unwrap()).unwrap();

        let mut buf = [0u8; 8];
        assert_eq!(reader.read_at(&mut buf, 95).unwrap(), 5);
        assert_eq!(&buf[..5], &data[95..]);
        assert_eq!(ReadAt::read_at(&reader, &mut buf, 200).unwrap(), 0);
    }

    #[test]
    fn test_reader_as_source() {
        let data = pattern(100);
        let inner = ConcurrentReader::new(data.clone(), 100, ReaderConfig::new(50).unwrap()).unwrap();
        let outer = ConcurrentReader::new(&inner, 100, ReaderConfig::new(25).unwrap()).unwrap();

        assert_eq!(outer.len(), 4);
        assert_eq!(&outer.chunk(1).unwrap().data().unwrap()[..], &data[25..50]);
    }

    #[test]
    fn test_chunks_owned() {
        let data = std::sync::Arc::new(pattern(64));
        let reader = ConcurrentReader::new(data, 64, ReaderConfig::new(16).unwrap()).unwrap();

        let chunks = reader.chunks_owned();
        drop(reader);
        let total: usize = chunks
            .into_iter()
            .map(|mut c| c.data().unwrap().len())
            .sum();
        assert_eq!(total, 64);
    }
}
