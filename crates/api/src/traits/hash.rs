//! Message digest trait

use crate::Result;

/// A one-shot cryptographic hash function
///
/// Implementations are stateless: every call to [`digest`](Self::digest)
/// hashes the complete input from scratch.
pub trait HashFunction {
    /// Returns the name of this hash function
    fn name(&self) -> &'static str;

    /// Size of the digest in bytes
    fn output_size(&self) -> usize;

    /// Hash `data` and return the digest
    fn digest(&self, data: &[u8]) -> Result<Vec<u8>>;
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).digest(data)
    }
}
