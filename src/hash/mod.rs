//! Streaming hash accumulators for chunk digests.
//!
//! [`Chunk::hash`](crate::Chunk::hash) does not pick an algorithm. It drives
//! any [`ChunkHasher`]: reset, feed the range, finalize.
//!
//! - [`ChunkHasher`] - The accumulator capability
//! - [`Blake3Hasher`] - BLAKE3, producing a [`ChunkHash`] (requires `hash-blake3` feature)
//! - [`DigestHasher`] - Adapter for RustCrypto digests such as MD5, SHA-1, SHA-256
//!   (requires `hash-digest` feature)

mod chunk_hash;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-digest")]
mod digest;

pub use chunk_hash::ChunkHash;

#[cfg(feature = "hash-blake3")]
pub use self::blake3::Blake3Hasher;

#[cfg(feature = "hash-digest")]
pub use self::digest::DigestHasher;

/// A reset-able streaming hash accumulator.
///
/// `finalize` must not disturb the accumulated state, so that a caller can
/// read the digest and keep feeding data, like `hash.Hash.Sum` style APIs.
pub trait ChunkHasher {
    /// The digest produced by [`ChunkHasher::finalize`].
    type Output;

    /// Discards all accumulated state.
    fn reset(&mut self);

    /// Feeds more data.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of everything fed since the last reset.
    fn finalize(&self) -> Self::Output;
}
