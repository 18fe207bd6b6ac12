//! Affine curve points and their wire encoding

use core::fmt;
use std::sync::Arc;

use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};
use crate::field::{byte_width, FieldElement};

use super::constants::{
    COMPRESSED_POINT_FLAG_EVEN, COMPRESSED_POINT_FLAG_ODD, INFINITY_FLAG, UNCOMPRESSED_POINT_FLAG,
};

/// Format for point serialization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointFormat {
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

/// A point in affine coordinates, or the point at infinity
///
/// `Point` does not know its curve. Curve membership of finite points is
/// enforced by [`EllipticCurve`](super::EllipticCurve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The group identity
    Infinity,
    /// A finite point `(x, y)`
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Build a finite point from two coordinates over the same modulus
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        debug_assert!(
            x.modulus() == y.modulus(),
            "point coordinates over different moduli"
        );
        Point::Affine { x, y }
    }

    /// The point at infinity
    pub fn infinity() -> Self {
        Point::Infinity
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate of a finite point
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Affine { x, .. } => Some(x),
            Point::Infinity => None,
        }
    }

    /// y-coordinate of a finite point
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Affine { y, .. } => Some(y),
            Point::Infinity => None,
        }
    }

    /// Size of the uncompressed encoding for coordinates below `modulus`
    pub fn uncompressed_size(modulus: &BigInt) -> usize {
        1 + 2 * byte_width(modulus)
    }

    /// Uncompressed encoding `0x04 || x || y` with fixed-width coordinates
    ///
    /// The point at infinity encodes as the single byte `0x00`.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Point::Infinity => vec![INFINITY_FLAG],
            Point::Affine { x, y } => {
                let mut out = Vec::with_capacity(1 + x.byte_size() + y.byte_size());
                out.push(UNCOMPRESSED_POINT_FLAG);
                out.extend_from_slice(&x.to_bytes());
                out.extend_from_slice(&y.to_bytes());
                out
            }
        }
    }

    /// Serialize in the requested format
    pub fn serialize_with(&self, format: PointFormat) -> Result<Vec<u8>> {
        match format {
            PointFormat::Uncompressed => Ok(self.serialize()),
            PointFormat::Compressed => Err(Error::NotImplemented {
                feature: "compressed point encoding",
            }),
        }
    }

    /// Parse a point starting at `offset` in `buffer`
    ///
    /// Bytes after the encoded point are ignored, so points can be read out
    /// of larger messages. Coordinates must already be reduced below
    /// `modulus`.
    pub fn parse(buffer: &[u8], offset: usize, modulus: &Arc<BigInt>) -> Result<Self> {
        let data = buffer.get(offset..).unwrap_or(&[]);
        validate::min_length("serialized point", data.len(), 1)?;

        match data[0] {
            UNCOMPRESSED_POINT_FLAG => Self::parse_uncompressed(data, modulus),
            COMPRESSED_POINT_FLAG_EVEN | COMPRESSED_POINT_FLAG_ODD => Err(Error::NotImplemented {
                feature: "compressed point parsing",
            }),
            flag => Err(Error::InvalidFormat {
                context: "serialized point",
                flag,
            }),
        }
    }

    fn parse_uncompressed(data: &[u8], modulus: &Arc<BigInt>) -> Result<Self> {
        let width = byte_width(modulus);
        validate::min_length("uncompressed point", data.len(), 1 + 2 * width)?;

        let x = Self::parse_coordinate(&data[1..1 + width], modulus)?;
        let y = Self::parse_coordinate(&data[1 + width..1 + 2 * width], modulus)?;
        Ok(Point::Affine { x, y })
    }

    fn parse_coordinate(bytes: &[u8], modulus: &Arc<BigInt>) -> Result<FieldElement> {
        let value = BigInt::from_bytes_be(bytes, false);
        validate::reduced("uncompressed point", &value, modulus)?;
        Ok(FieldElement::new(value, modulus))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => f.write_str("{infinity}"),
            Point::Affine { x, y } => write!(f, "{{{},{}}}", x.value(), y.value()),
        }
    }
}
