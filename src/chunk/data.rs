//! The Chunk type - a descriptor bound to a live source.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};
use std::ops::Range;

use bytes::Bytes;
use tracing::trace;

use super::{ByteRange, SectionReader};
use crate::buffer::Buffer;
use crate::config::DEFAULT_CHUNK_SIZE;
use crate::hash::ChunkHasher;
use crate::source::ReadAt;

/// One chunk of a source: a [`ByteRange`] plus a [`SectionReader`] over it.
///
/// A chunk is independently readable and hashable. Its cursor is private, so
/// distinct chunks can be processed on different threads at the same time.
/// All operations take `&mut self`; giving two workers the same range means
/// cloning the chunk, which yields an independent cursor.
///
/// [`Chunk::hash`] and [`Chunk::data`] always cover the whole range, whatever
/// the cursor position was, and leave the cursor at the start of the range
/// when they return (on success and on error). They can be called any number
/// of times, interleaved with [`Read`].
///
/// The chunk holds the source handle `S` it was bound with. Binding with a
/// reference ties the chunk's lifetime to the source; binding with an `Arc`
/// makes it `'static`.
///
/// # Example
///
/// ```
/// use std::io::Read;
/// use splitread::{ByteRange, Chunk};
///
/// let data = b"0123456789".to_vec();
/// let mut chunk = Chunk::new(ByteRange::new(1, 4, 4), &data);
///
/// let mut head = [0u8; 2];
/// chunk.read_exact(&mut head)?;
/// assert_eq!(&head, b"45");
///
/// // data() covers the full range regardless of the cursor
/// assert_eq!(&chunk.data()?[..], b"4567");
/// assert_eq!(chunk.position(), 0);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunk<S> {
    range: ByteRange,
    section: SectionReader<S>,
}

impl<S: ReadAt> Chunk<S> {
    /// Binds `range` to `source`.
    pub fn new(range: ByteRange, source: S) -> Self {
        Self {
            section: SectionReader::new(source, range.offset, range.size),
            range,
        }
    }

    /// Hashes the whole chunk.
    ///
    /// Resets `hasher` first, discarding whatever state the caller left in it,
    /// streams the range through it, rewinds the cursor, and returns the
    /// digest. Source errors are returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use splitread::{Blake3Hasher, ByteRange};
    ///
    /// let data = vec![0xABu8; 64];
    /// let mut chunk = ByteRange::new(0, 0, 64).bind(&data);
    /// let mut hasher = Blake3Hasher::new();
    ///
    /// let first = chunk.hash(&mut hasher)?;
    /// let second = chunk.hash(&mut hasher)?;
    /// assert_eq!(first, second);
    /// assert_eq!(first, Blake3Hasher::hash(&data));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn hash<H: ChunkHasher>(&mut self, hasher: &mut H) -> io::Result<H::Output> {
        hasher.reset();
        self.section.rewind();
        let result = self.stream_into(hasher);
        self.section.rewind();

        trace!(
            index = self.range.index,
            offset = self.range.offset,
            size = self.range.size,
            ok = result.is_ok(),
            "hashed chunk"
        );
        result.map(|()| hasher.finalize())
    }

    /// Reads the whole chunk into a newly allocated buffer.
    ///
    /// This allocates memory for up to the whole chunk. Be careful with large
    /// chunk sizes! The buffer grows with the bytes actually read, so a
    /// source shorter than its declared size yields a short buffer. The
    /// cursor is rewound afterwards.
    pub fn data(&mut self) -> io::Result<Bytes> {
        let capacity = usize::try_from(self.range.size)
            .unwrap_or(usize::MAX)
            .min(DEFAULT_CHUNK_SIZE);
        let mut buf = Vec::with_capacity(capacity);

        self.section.rewind();
        let result = self.section.read_to_end(&mut buf);
        self.section.rewind();

        trace!(
            index = self.range.index,
            offset = self.range.offset,
            size = self.range.size,
            ok = result.is_ok(),
            "materialized chunk"
        );
        result.map(|_| Bytes::from(buf))
    }

    fn stream_into<H: ChunkHasher>(&mut self, hasher: &mut H) -> io::Result<()> {
        let mut buffer = Buffer::take();
        let buf = buffer.as_mut_slice();
        loop {
            match self.section.read(buf) {
                Ok(0) => return Ok(()),
                Ok(n) => hasher.update(&buf[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<S> Chunk<S> {
    /// Returns the chunk's length in bytes.
    pub fn size(&self) -> u64 {
        self.range.size
    }

    /// Returns the 0-based index of the chunk relative to other chunks.
    pub fn index(&self) -> usize {
        self.range.index
    }

    /// Returns the byte offset of the chunk in the source.
    pub fn offset(&self) -> u64 {
        self.range.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.range.end()
    }

    /// Returns the chunk as a range of source offsets.
    pub fn range(&self) -> Range<u64> {
        self.range.range()
    }

    /// Returns true if the chunk covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the descriptor this chunk was bound from.
    pub fn descriptor(&self) -> ByteRange {
        self.range
    }

    /// Returns the cursor position relative to the start of the chunk.
    pub fn position(&self) -> u64 {
        self.section.position()
    }

    /// Moves the cursor back to the start of the chunk.
    pub fn rewind(&mut self) {
        self.section.rewind();
    }

    /// Returns a reference to the source handle.
    pub fn source(&self) -> &S {
        self.section.get_ref()
    }

    /// Consumes the chunk and returns its restricted view.
    pub fn into_section(self) -> SectionReader<S> {
        self.section
    }
}

impl<S: ReadAt> Read for Chunk<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.section.read(buf)
    }
}

impl<S> Seek for Chunk<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.section.seek(pos)
    }
}

impl<S> fmt::Display for Chunk<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk#{}({} bytes @ {})",
            self.range.index, self.range.size, self.range.offset
        )
    }
}
