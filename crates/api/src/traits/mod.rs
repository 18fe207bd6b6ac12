//! Capability traits for pluggable primitives

pub mod hash;
pub mod kdf;

pub use hash::HashFunction;
pub use kdf::KeyDerivationFunction;
