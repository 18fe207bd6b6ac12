//! Elliptic-curve protocols for ecctool
//!
//! [`EccAlg`] owns a curve and an optional key pair and implements key
//! generation, ECDSA signatures and ECIES encryption on top of the
//! primitives in `ecctool-algorithms`. [`KeySerializer`] reads and writes
//! the textual key record format `<curve>:[<public>:<private>]`.
//!
//! Hashing and key derivation are injected capabilities; the defaults are
//! SHA-256 and PBKDF2-HMAC-SHA256. Randomness is supplied by the caller on
//! every operation that needs it.

#![forbid(unsafe_code)]

mod alg;
mod ecdsa;
mod ecies;
pub mod random;
mod serializer;

pub use alg::EccAlg;
pub use serializer::KeySerializer;
