//! Adapter for the RustCrypto `digest` family.

use digest::{Digest, Output};

use super::ChunkHasher;

/// Wraps any [`Digest`] (`md5::Md5`, `sha1::Sha1`, `sha2::Sha256`, ...) as a
/// [`ChunkHasher`].
///
/// # Example
///
/// ```
/// use sha2::{Digest, Sha256};
/// use splitread::{ChunkHasher, DigestHasher};
///
/// let mut hasher = DigestHasher::<Sha256>::new();
/// hasher.update(b"abc");
/// assert_eq!(hasher.finalize(), Sha256::digest(b"abc"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigestHasher<D> {
    inner: D,
}

impl<D: Digest> DigestHasher<D> {
    /// Creates a new hasher in its initial state.
    pub fn new() -> Self {
        Self { inner: D::new() }
    }

    /// Consumes the adapter and returns the wrapped digest.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Digest> From<D> for DigestHasher<D> {
    fn from(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Digest + Clone> ChunkHasher for DigestHasher<D> {
    type Output = Output<D>;

    fn reset(&mut self) {
        self.inner = D::new();
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize(&self) -> Output<D> {
        self.inner.clone().finalize()
    }
}
