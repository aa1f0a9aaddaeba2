//! Fixed-size partitioning of a byte address space.

use crate::chunk::ByteRange;
use crate::error::ReaderError;

/// Splits `[0, size)` into contiguous ranges of `chunk_size` bytes.
///
/// Every range has `chunk_size` bytes except the last, which holds the
/// remainder `size % chunk_size` when that remainder is non-zero. The result
/// is ordered by index and offset; `size == 0` yields no ranges.
///
/// # Errors
///
/// - [`ReaderError::InvalidConfig`] if `chunk_size` is zero
/// - [`ReaderError::TooManyChunks`] if the range count does not fit in `usize`
///
/// # Example
///
/// ```
/// use splitread::partition;
///
/// let ranges = partition(1000, 256)?;
/// let sizes: Vec<u64> = ranges.iter().map(|r| r.size).collect();
/// assert_eq!(sizes, [256, 256, 256, 232]);
/// # Ok::<(), splitread::ReaderError>(())
/// ```
pub fn partition(size: u64, chunk_size: u64) -> Result<Vec<ByteRange>, ReaderError> {
    if chunk_size == 0 {
        return Err(ReaderError::InvalidConfig {
            message: "chunk sizes below 1 not allowed",
        });
    }

    let count = size.div_ceil(chunk_size);
    let nchunks = usize::try_from(count).map_err(|_| ReaderError::TooManyChunks { count })?;

    let mut ranges: Vec<ByteRange> = (0..nchunks)
        .map(|i| ByteRange::new(i, i as u64 * chunk_size, chunk_size))
        .collect();

    // Shrink the last range to the bytes that don't fill a whole chunk.
    // An exact multiple keeps a full-sized last chunk.
    let rem = size % chunk_size;
    if rem != 0 {
        if let Some(last) = ranges.last_mut() {
            last.size = rem;
        }
    }

    Ok(ranges)
}
