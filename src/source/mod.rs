//! Random-access byte sources.
//!
//! - [`ReadAt`] - Positional reads that never touch a shared cursor
//!
//! Every chunk of a reader reads from the same source, often from several
//! threads at once. A source is therefore addressed purely by offset and
//! `read_at` takes `&self`.

use std::fs::File;
use std::io;
use std::sync::Arc;

use bytes::Bytes;

/// A byte source that can be read at arbitrary offsets.
///
/// `read_at` reads up to `buf.len()` bytes starting at `offset` and returns
/// how many bytes were read. Short reads are allowed. `Ok(0)` for a
/// non-empty buffer means `offset` is at or past the end of the source.
///
/// Implementations used with concurrent readers must be safe to call from
/// several threads at once (`Sync`) and must not keep an implicit position.
///
/// # Example
///
/// ```
/// use splitread::ReadAt;
///
/// let data = b"hello world".to_vec();
/// let mut buf = [0u8; 5];
/// let n = data.read_at(&mut buf, 6)?;
/// assert_eq!(&buf[..n], b"world");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait ReadAt {
    /// Reads bytes starting at `offset` into `buf`.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
}

impl ReadAt for [u8] {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let start = match usize::try_from(offset) {
            Ok(start) if start < self.len() => start,
            _ => return Ok(0),
        };
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self[start..start + n]);
        Ok(n)
    }
}

impl ReadAt for Vec<u8> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_slice().read_at(buf, offset)
    }
}

impl ReadAt for Bytes {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_ref().read_at(buf, offset)
    }
}

#[cfg(unix)]
impl ReadAt for File {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        std::os::unix::fs::FileExt::read_at(self, buf, offset)
    }
}

// seek_read moves the handle's cursor as a side effect, but nothing here
// relies on that cursor.
#[cfg(windows)]
impl ReadAt for File {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_read(self, buf, offset)
    }
}

impl<R: ReadAt + ?Sized> ReadAt for &R {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<R: ReadAt + ?Sized> ReadAt for Box<R> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<R: ReadAt + ?Sized> ReadAt for Arc<R> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_read_inside() {
        let data: &[u8] = b"0123456789";
        let mut buf = [0u8; 4];
        assert_eq!(data.read_at(&mut buf, 3).unwrap(), 4);
        assert_eq!(&buf, b"3456");
    }

    #[test]
    fn test_slice_short_read_at_end() {
        let data: &[u8] = b"0123456789";
        let mut buf = [0u8; 8];
        assert_eq!(data.read_at(&mut buf, 7).unwrap(), 3);
        assert_eq!(&buf[..3], b"789");
    }

    #[test]
    fn test_slice_past_end() {
        let data: &[u8] = b"0123";
        let mut buf = [0u8; 2];
        assert_eq!(data.read_at(&mut buf, 4).unwrap(), 0);
        assert_eq!(data.read_at(&mut buf, u64::MAX).unwrap(), 0);
    }

    #[test]
    fn test_forwarding_impls() {
        let data = Arc::new(Bytes::from_static(b"abcdef"));
        let boxed: Box<dyn ReadAt> = Box::new(b"abcdef".to_vec());
        let mut buf = [0u8; 3];

        assert_eq!((&data).read_at(&mut buf, 1).unwrap(), 3);
        assert_eq!(&buf, b"bcd");
        assert_eq!(boxed.read_at(&mut buf, 3).unwrap(), 3);
        assert_eq!(&buf, b"def");
    }

    #[test]
    fn test_file_read_at() {
        use std::io::Write;

        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"positional reads").unwrap();

        let mut buf = [0u8; 5];
        assert_eq!(ReadAt::read_at(&file, &mut buf, 11).unwrap(), 5);
        assert_eq!(&buf, b"reads");
    }
}
