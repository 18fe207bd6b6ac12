//! Short-Weierstrass curves over prime fields

use std::sync::Arc;

use ecctool_params::{curve_by_name, DomainParameters};
use log::debug;

use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};
use crate::field::FieldElement;

use super::point::Point;

/// A curve `y^2 = x^3 + ax + b (mod p)` with base point `G` of order `n`
#[derive(Clone, Debug)]
pub struct EllipticCurve {
    name: String,
    p: Arc<BigInt>,
    a: FieldElement,
    b: FieldElement,
    g: Point,
    n: Arc<BigInt>,
    h: BigInt,
}

fn parse_field(curve: &str, field: &'static str, value: &str) -> Result<BigInt> {
    value.parse().map_err(|_| Error::InvalidCurveParameters {
        curve: curve.to_string(),
        reason: format!("malformed {}", field).into(),
    })
}

impl EllipticCurve {
    /// Build a curve from domain parameters
    ///
    /// The base point is decoded from its uncompressed hex form and must
    /// satisfy the curve equation.
    pub fn new(params: &DomainParameters) -> Result<Self> {
        let name = params.name;
        let invalid = |reason: &'static str| Error::InvalidCurveParameters {
            curve: name.to_string(),
            reason: reason.into(),
        };

        let p = parse_field(name, "p", params.p)?;
        let n = parse_field(name, "n", params.n)?;
        let h = parse_field(name, "h", params.h)?;
        if p.is_negative() || p.bit_size() < 2 {
            return Err(invalid("field modulus must be greater than one"));
        }
        if n.is_negative() || n.bit_size() < 2 {
            return Err(invalid("base point order must be greater than one"));
        }

        let p = Arc::new(p);
        let a = FieldElement::make_element(parse_field(name, "a", params.a)?, &p)
            .map_err(|_| invalid("coefficient a is negative"))?;
        let b = FieldElement::make_element(parse_field(name, "b", params.b)?, &p)
            .map_err(|_| invalid("coefficient b is negative"))?;

        let g_hex: String = params.g.chars().filter(|c| !c.is_whitespace()).collect();
        let g_bytes = hex::decode(&g_hex).map_err(|_| invalid("malformed base point"))?;
        let g = Point::parse(&g_bytes, 0, &p).map_err(|_| invalid("malformed base point"))?;

        let curve = Self {
            name: name.to_string(),
            p,
            a,
            b,
            g,
            n: Arc::new(n),
            h,
        };
        if !curve.check_point_on_curve(&curve.g) {
            return Err(invalid("base point is not on the curve"));
        }

        debug!(
            "constructed curve {} ({}-bit field, {}-bit order)",
            curve.name,
            curve.p.bit_size(),
            curve.n.bit_size()
        );
        Ok(curve)
    }

    /// Build one of the named built-in curves
    pub fn from_name(name: &str) -> Result<Self> {
        let params = curve_by_name(name).ok_or_else(|| Error::UnsupportedCurve {
            name: name.to_string(),
        })?;
        Self::new(params)
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the field modulus `p`
    pub fn field_modulus(&self) -> &Arc<BigInt> {
        &self.p
    }

    /// Coefficient `a`
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Base point `G`
    pub fn base_point(&self) -> &Point {
        &self.g
    }

    /// Order `n` of the base point
    pub fn base_point_order(&self) -> &BigInt {
        &self.n
    }

    /// Shared handle to `n`, for arithmetic modulo the group order
    pub fn order_modulus(&self) -> &Arc<BigInt> {
        &self.n
    }

    /// Cofactor `h`
    pub fn cofactor(&self) -> &BigInt {
        &self.h
    }

    /// Size of an uncompressed point on this curve
    pub fn point_byte_size(&self) -> usize {
        Point::uncompressed_size(&self.p)
    }

    /// Whether `point` satisfies `y^2 = x^3 + ax + b`
    ///
    /// The point at infinity is the group identity and always belongs to
    /// the curve.
    pub fn check_point_on_curve(&self, point: &Point) -> bool {
        let (x, y) = match point {
            Point::Infinity => return true,
            Point::Affine { x, y } => (x, y),
        };
        if x.modulus() != &self.p || y.modulus() != &self.p {
            return false;
        }
        let lhs = y.square();
        let rhs = x.square().mul(x).add(&self.a.mul(x)).add(&self.b);
        lhs == rhs
    }

    /// The additive inverse `(x, -y)`
    pub fn invert_point(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x.clone(), y.negate()),
        }
    }

    /// Group addition `P + Q`
    pub fn add_points(&self, p: &Point, q: &Point) -> Result<Point> {
        let ((x1, y1), (x2, y2)) = match (p, q) {
            (Point::Infinity, _) => return Ok(q.clone()),
            (_, Point::Infinity) => return Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 && *y1 == y2.negate() {
            return Ok(Point::Infinity);
        }
        if x1 == x2 && y1 == y2 {
            return self.double_point(p);
        }

        // s = (y1 - y2) / (x1 - x2)
        let s = y1.sub(y2).div(&x1.sub(x2))?;
        let x3 = s.square().sub(x1).sub(x2);
        let y3 = s.mul(&x1.sub(&x3)).sub(y1);
        Ok(Point::new(x3, y3))
    }

    /// Point doubling `2P`
    pub fn double_point(&self, p: &Point) -> Result<Point> {
        let (x, y) = match p {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y } => (x, y),
        };
        // Vertical tangent
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        // s = (3x^2 + a) / 2y
        let x_sq = x.square();
        let numerator = x_sq.double().add(&x_sq).add(&self.a);
        let s = numerator.div(&y.double())?;
        let x3 = s.square().sub(&x.double());
        let y3 = s.mul(&x.sub(&x3)).sub(y);
        Ok(Point::new(x3, y3))
    }

    /// Scalar multiplication `k * P` by double-and-add from the top bit
    ///
    /// `k == 0` gives the point at infinity; negative scalars are rejected.
    pub fn multiply_point_with_scalar(&self, point: &Point, scalar: &BigInt) -> Result<Point> {
        validate::non_negative("scalar", scalar)?;
        let top = match scalar.most_significant_bit_index() {
            Some(index) => index,
            None => return Ok(Point::Infinity),
        };

        let mut acc = Point::Infinity;
        for bit in (0..=top).rev() {
            acc = self.double_point(&acc)?;
            if scalar.get_bit_at(bit) {
                acc = self.add_points(&acc, point)?;
            }
        }
        Ok(acc)
    }

    /// Build a point from raw coordinates and check that it is on the curve
    pub fn make_point(&self, x: BigInt, y: BigInt) -> Result<Point> {
        let x = FieldElement::make_element(x, &self.p)?;
        let y = FieldElement::make_element(y, &self.p)?;
        self.validated(Point::new(x, y))
    }

    /// Parse a serialized point at `offset` and check that it is on the curve
    pub fn make_point_from_bytes(&self, buffer: &[u8], offset: usize) -> Result<Point> {
        self.validated(Point::parse(buffer, offset, &self.p)?)
    }

    fn validated(&self, point: Point) -> Result<Point> {
        if !self.check_point_on_curve(&point) {
            return Err(Error::PointNotOnCurve {
                context: "point construction",
            });
        }
        Ok(point)
    }
}
