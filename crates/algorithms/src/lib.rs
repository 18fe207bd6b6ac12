//! Arithmetic and elliptic-curve primitives for ecctool
//!
//! The crate is layered bottom-up:
//!
//! - [`BigInt`]: arbitrary-precision signed integers over big-endian bytes
//! - [`FieldElement`]: integers modulo a shared prime
//! - [`Point`] and [`EllipticCurve`]: the short-Weierstrass group law
//!
//! It also provides the default capability implementations consumed by the
//! protocol layer: [`Sha256`] for hashing and [`Pbkdf2`] for key derivation.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Arbitrary-precision integers
pub mod bigint;
pub use bigint::BigInt;

// Prime-field arithmetic
pub mod field;
pub use field::FieldElement;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{EllipticCurve, Point, PointFormat};

// Capability implementations
pub mod hash;
pub use hash::Sha256;

pub mod kdf;
pub use kdf::Pbkdf2;
