//! Restricted views onto a positional source.

use std::io::{self, Read, Seek, SeekFrom};

use crate::source::ReadAt;

/// A read-only window `[offset, offset + size)` onto a [`ReadAt`] source.
///
/// The view owns its cursor. Reading advances only this cursor; the source is
/// addressed by offset, so any number of views over the same source can be
/// read at the same time without affecting each other.
///
/// Positions reported by [`Seek`] and [`SectionReader::position`] are
/// relative to the start of the window.
///
/// # Example
///
/// ```
/// use std::io::Read;
/// use splitread::SectionReader;
///
/// let data = b"hello world".to_vec();
/// let mut view = SectionReader::new(&data, 6, 5);
///
/// let mut out = String::new();
/// view.read_to_string(&mut out)?;
/// assert_eq!(out, "world");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SectionReader<S> {
    source: S,
    base: u64,
    limit: u64,
    pos: u64,
}

impl<S: ReadAt> SectionReader<S> {
    /// Creates a view of `size` bytes starting at `offset`.
    ///
    /// A window reaching past `u64::MAX` is clamped.
    pub fn new(source: S, offset: u64, size: u64) -> Self {
        Self {
            source,
            base: offset,
            limit: offset.saturating_add(size),
            pos: offset,
        }
    }
}

impl<S> SectionReader<S> {
    /// Returns the size of the window in bytes.
    pub fn size(&self) -> u64 {
        self.limit - self.base
    }

    /// Returns the source offset where the window starts.
    pub fn offset(&self) -> u64 {
        self.base
    }

    /// Returns the cursor position relative to the start of the window.
    pub fn position(&self) -> u64 {
        self.pos - self.base
    }

    /// Moves the cursor back to the start of the window.
    pub fn rewind(&mut self) {
        self.pos = self.base;
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Consumes the view and returns the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ReadAt> Read for SectionReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.limit {
            return Ok(0);
        }

        let remaining = usize::try_from(self.limit - self.pos).unwrap_or(usize::MAX);
        let len = buf.len().min(remaining);
        let n = self.source.read_at(&mut buf[..len], self.pos)?;
        self.pos += n as u64;
        Ok(n)
    }
}

impl<S> Seek for SectionReader<S> {
    /// Seeks within the window. Seeking past the end is allowed; reads there
    /// return `Ok(0)`.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(n) => i128::from(self.base) + i128::from(n),
            SeekFrom::Current(delta) => i128::from(self.pos) + i128::from(delta),
            SeekFrom::End(delta) => i128::from(self.limit) + i128::from(delta),
        };

        if target < i128::from(self.base) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a position before the start of the section",
            ));
        }
        self.pos = u64::try_from(target).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek position overflows u64")
        })?;

        Ok(self.pos - self.base)
    }
}
