//! Key derivation trait

use crate::Result;

/// Password-based key derivation
pub trait KeyDerivationFunction {
    /// Returns the name of this key derivation function
    fn name(&self) -> &'static str;

    /// Derive `length` bytes of key material from `password` and `salt`
    ///
    /// A `length` of zero yields an empty vector.
    fn derive_key(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Vec<u8>>;
}

impl<K: KeyDerivationFunction + ?Sized> KeyDerivationFunction for &K {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn derive_key(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Vec<u8>> {
        (**self).derive_key(password, salt, length)
    }
}
