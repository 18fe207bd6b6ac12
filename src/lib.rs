//! # ecctool
//!
//! Elliptic-curve cryptography built from first principles: arbitrary-precision
//! integers, prime-field arithmetic, the short-Weierstrass group law, ECDSA
//! signatures and ECIES encryption.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! ecctool = "0.3"
//! ```
//!
//! ```no_run
//! use ecctool::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let mut alg = EccAlg::from_curve_name("secp256k1")?;
//! alg.generate_keys(&mut OsRng)?;
//!
//! let signature = alg.sign(b"hello", &mut OsRng)?;
//! assert!(alg.verify(b"hello", &signature));
//!
//! let ciphertext = alg.encrypt(b"secret", &mut OsRng)?;
//! assert_eq!(alg.decrypt(&ciphertext)?, b"secret");
//! # Ok::<(), ecctool::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecctool-api`]: Error type and the hash/KDF capability traits
//! - [`ecctool-params`]: Domain parameters of the built-in curves
//! - [`ecctool-algorithms`]: Big integers, field elements, points and curves
//! - [`ecctool-ecc`]: Key management, ECDSA and ECIES

pub use ecctool_algorithms as algorithms;
pub use ecctool_api as api;
pub use ecctool_ecc as ecc;
pub use ecctool_params as params;

/// Common imports for ecctool users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export capability traits
    pub use crate::api::{HashFunction, KeyDerivationFunction};

    // Arithmetic and curve types
    pub use crate::algorithms::{
        BigInt, EllipticCurve, FieldElement, Pbkdf2, Point, PointFormat, Sha256,
    };

    // Curve catalogue
    pub use crate::params::{curve_by_name, supported_curves, DomainParameters};

    // Protocols
    pub use crate::ecc::{EccAlg, KeySerializer};
}
