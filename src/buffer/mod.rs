//! Internal scratch buffers for streaming chunk contents.
//!
//! Hashing a chunk copies its range through a fixed-size buffer. The buffer
//! is taken from a thread-local pool so that hashing thousands of chunks on a
//! worker thread does not allocate once per chunk. It is an implementation
//! detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
