//! Thread-local buffer pool for efficient memory reuse.

use std::cell::RefCell;

/// Length of a pooled scratch buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable scratch buffer of [`DEFAULT_BUFFER_SIZE`] bytes.
///
/// Contents are whatever the previous user left behind.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take() -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let data = pool
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| vec![0u8; DEFAULT_BUFFER_SIZE]);
            Self { data }
        })
    }

    /// Returns the whole buffer for reading into.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.data.len() == DEFAULT_BUFFER_SIZE {
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_take() {
        let mut buf = Buffer::take();
        assert_eq!(buf.as_mut_slice().len(), DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_buffer_reuse() {
        let ptr = {
            let mut buf = Buffer::take();
            buf.as_mut_slice()[0] = 0xAA;
            buf.as_mut_slice().as_ptr()
        };

        // The same allocation comes back from the pool, length intact
        let mut buf2 = Buffer::take();
        assert_eq!(buf2.as_mut_slice().len(), DEFAULT_BUFFER_SIZE);
        assert_eq!(buf2.as_mut_slice().as_ptr(), ptr);
    }

    #[test]
    fn test_pool_is_bounded() {
        let bufs: Vec<_> = (0..MAX_POOL_SIZE + 2).map(|_| Buffer::take()).collect();
        drop(bufs);
        THREAD_BUFFER_POOL.with(|pool| assert!(pool.borrow().len() <= MAX_POOL_SIZE));
    }
}
