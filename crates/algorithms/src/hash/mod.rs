//! Hash function implementations
//!
//! Backed by the RustCrypto `sha2` crate and exposed through the
//! [`HashFunction`] capability trait.

use ecctool_api::{HashFunction, Result};
use sha2::Digest;


/// SHA-256 output size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 (FIPS 180-4)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl Sha256 {
    /// Create a new SHA-256 instance
    pub fn new() -> Self {
        Self
    }
}

impl HashFunction for Sha256 {
    fn name(&self) -> &'static str {
        "SHA-256"
    }

    fn output_size(&self) -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(sha2::Sha256::digest(data).to_vec())
    }
}
