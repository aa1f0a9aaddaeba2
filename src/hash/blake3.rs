//! BLAKE3-based chunk hashing implementation.

use super::{ChunkHash, ChunkHasher};

/// A hasher that computes BLAKE3 hashes.
///
/// # Example
///
/// ```
/// use splitread::{Blake3Hasher, ChunkHasher};
///
/// let mut hasher = Blake3Hasher::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"hello world"));
/// ```
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Creates a new hasher with a key for keyed hashing.
    ///
    /// `reset` keeps the key.
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            state: blake3::Hasher::new_keyed(key),
        }
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> ChunkHash {
        ChunkHash::new(blake3::hash(data).into())
    }
}

impl ChunkHasher for Blake3Hasher {
    type Output = ChunkHash;

    fn reset(&mut self) {
        self.state.reset();
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finalize(&self) -> ChunkHash {
        ChunkHash::new(self.state.finalize().into())
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        let hash = Blake3Hasher::hash(b"hello world");
        assert_eq!(hash, Blake3Hasher::hash(b"hello world"));
        assert_ne!(hash, Blake3Hasher::hash(b"hello world!"));
    }

    #[test]
    fn test_finalize_keeps_state() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"hello ");
        let _ = hasher.finalize();
        hasher.update(b"world");

        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"hello world"));
    }

    #[test]
    fn test_reset() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"some data");

        hasher.reset();
        hasher.update(b"hello world");

        assert_eq!(hasher.finalize(), Blake3Hasher::hash(b"hello world"));
    }

    #[test]
    fn test_keyed_differs_and_survives_reset() {
        let key = [9u8; 32];
        let mut hasher = Blake3Hasher::new_keyed(&key);
        hasher.update(b"junk");
        hasher.reset();
        hasher.update(b"hello");

        let expected = ChunkHash::new(blake3::keyed_hash(&key, b"hello").into());
        assert_eq!(hasher.finalize(), expected);
        assert_ne!(expected, Blake3Hasher::hash(b"hello"));
    }
}
