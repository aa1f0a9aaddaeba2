//! Fixed-size digest values.

use std::fmt;

/// A 32-byte digest of a chunk's contents.
///
/// Produced by [`Blake3Hasher`](crate::Blake3Hasher); usable as a map key and
/// rendered as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkHash([u8; 32]);

impl ChunkHash {
    /// The size of the hash in bytes.
    pub const SIZE: usize = 32;

    /// Creates a chunk hash from a byte array.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a chunk hash from a slice.
    ///
    /// Returns `None` if the slice is not exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 32]>::try_from(slice).ok().map(Self)
    }

    /// Returns the hash as a byte array.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Parses a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != Self::SIZE * 2 || !hex_str.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for ChunkHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ChunkHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let bytes = vec![7u8; 32];
        let hash = ChunkHash::from_slice(&bytes).unwrap();
        assert_eq!(hash.as_bytes(), &[7u8; 32]);

        assert!(ChunkHash::from_slice(&[0u8; 31]).is_none());
        assert!(ChunkHash::from_slice(&[0u8; 33]).is_none());
    }

    #[test]
    fn test_hex_roundtrip() {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&[0x01, 0x23, 0xAB, 0xEF]);
        let hash = ChunkHash::new(bytes);

        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("0123abef"));
        assert_eq!(ChunkHash::from_hex(&hex), Some(hash));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(ChunkHash::from_hex("abc").is_none());
        assert!(ChunkHash::from_hex(&"zz".repeat(32)).is_none());
        // 64 bytes, but not 64 ascii characters
        assert!(ChunkHash::from_hex(&"é".repeat(32)).is_none());
    }
}
