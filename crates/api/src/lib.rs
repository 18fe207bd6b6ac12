//! Public API traits and types for the ecctool library
//!
//! This crate provides the public API surface shared by the ecctool crates:
//! the error type every fallible operation returns and the capability
//! traits that let the protocol layer swap its hash and key-derivation
//! primitives.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{HashFunction, KeyDerivationFunction};
