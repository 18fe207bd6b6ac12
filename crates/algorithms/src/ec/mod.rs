//! Elliptic Curve Primitives
//!
//! Affine points and the group law on short-Weierstrass curves
//! `y^2 = x^3 + ax + b` over a prime field. Curves are built at runtime from
//! [`DomainParameters`](ecctool_params::DomainParameters), so any curve of
//! that shape can be used, including the named SEC2 curves.

pub mod constants;
mod curve;
mod point;

pub use constants::{
    COMPRESSED_POINT_FLAG_EVEN, COMPRESSED_POINT_FLAG_ODD, INFINITY_FLAG, UNCOMPRESSED_POINT_FLAG,
};
pub use curve::EllipticCurve;
pub use point::{Point, PointFormat};
