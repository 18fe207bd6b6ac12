//! Key Derivation Functions
//!
//! PBKDF2-HMAC-SHA256 (RFC 8018) on top of the RustCrypto `pbkdf2`, `hmac`
//! and `sha2` crates, exposed through the [`KeyDerivationFunction`]
//! capability trait.

use ecctool_api::{KeyDerivationFunction, Result};
use ecctool_params::ecies::PBKDF2_ITERATIONS;
use hmac::Hmac;

use crate::error::validate;


/// PBKDF2 with HMAC-SHA256 as the pseudorandom function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pbkdf2 {
    iterations: u32,
}

impl Default for Pbkdf2 {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl Pbkdf2 {
    /// PBKDF2 with the default iteration count
    pub fn new() -> Self {
        Self::default()
    }

    /// PBKDF2 with a custom iteration count
    pub fn with_iterations(iterations: u32) -> Result<Self> {
        validate::parameter(iterations > 0, "iterations", "must be at least one")?;
        Ok(Self { iterations })
    }

    /// Configured iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl KeyDerivationFunction for Pbkdf2 {
    fn name(&self) -> &'static str {
        "PBKDF2-HMAC-SHA256"
    }

    fn derive_key(&self, password: &[u8], salt: &[u8], length: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; length];
        if length > 0 {
            pbkdf2::pbkdf2::<Hmac<sha2::Sha256>>(password, salt, self.iterations, &mut out);
        }
        Ok(out)
    }
}
