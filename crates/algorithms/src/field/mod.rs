//! Prime-field arithmetic
//!
//! A [`FieldElement`] is an integer in `[0, p)` paired with a shared,
//! immutable handle to its modulus `p`. Every element and point of one curve
//! points at the same `Arc<BigInt>`, so building elements never copies the
//! modulus.

use core::fmt;
use std::sync::Arc;

use crate::bigint::BigInt;
use crate::error::{validate, Error, Result};


/// An element of the prime field `GF(p)`
#[derive(Clone, Debug)]
pub struct FieldElement {
    number: BigInt,
    modulus: Arc<BigInt>,
}

/// Number of bytes needed to encode any value below `modulus`
pub fn byte_width(modulus: &BigInt) -> usize {
    modulus.magnitude_bytes().len()
}

impl FieldElement {
    /// Build an element from an arbitrary non-negative integer, reducing it
    /// modulo `p` when it is out of range
    pub fn make_element(value: BigInt, modulus: &Arc<BigInt>) -> Result<Self> {
        validate::non_negative("value", &value)?;
        let number = if value >= **modulus {
            &value % &**modulus
        } else {
            value
        };
        Ok(Self {
            number,
            modulus: Arc::clone(modulus),
        })
    }

    /// Wrap a value already known to lie in `[0, p)`
    pub fn new(value: BigInt, modulus: &Arc<BigInt>) -> Self {
        debug_assert!(
            !value.is_negative() && value < **modulus,
            "field element out of range"
        );
        Self {
            number: value,
            modulus: Arc::clone(modulus),
        }
    }

    /// The additive identity
    pub fn zero(modulus: &Arc<BigInt>) -> Self {
        Self::new(BigInt::zero(), modulus)
    }

    /// The multiplicative identity
    pub fn one(modulus: &Arc<BigInt>) -> Self {
        Self::new(BigInt::one(), modulus)
    }

    /// Build an element from a small integer
    pub fn from_u64(value: u64, modulus: &Arc<BigInt>) -> Result<Self> {
        Self::make_element(BigInt::from(value), modulus)
    }

    /// The integer representative in `[0, p)`
    pub fn value(&self) -> &BigInt {
        &self.number
    }

    /// The shared modulus handle
    pub fn modulus(&self) -> &Arc<BigInt> {
        &self.modulus
    }

    /// Whether the element is zero
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Width in bytes of the fixed-size encoding
    pub fn byte_size(&self) -> usize {
        byte_width(&self.modulus)
    }

    /// Big-endian encoding, zero-padded to the modulus width
    pub fn to_bytes(&self) -> Vec<u8> {
        let width = self.byte_size();
        let mut out = vec![0u8; width];
        if !self.number.is_zero() {
            let significant = self.number.magnitude_bytes();
            out[width - significant.len()..].copy_from_slice(significant);
        }
        out
    }

    fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.modulus, &other.modulus) || self.modulus == other.modulus
    }

    fn with_number(&self, number: BigInt) -> Self {
        Self {
            number,
            modulus: Arc::clone(&self.modulus),
        }
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Self {
        debug_assert!(self.same_field(other), "field elements of different fields");
        let mut sum = &self.number + &other.number;
        if sum >= *self.modulus {
            sum -= &*self.modulus;
        }
        self.with_number(sum)
    }

    /// Field subtraction
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(self.same_field(other), "field elements of different fields");
        let mut diff = &self.number - &other.number;
        if diff.is_negative() {
            diff += &*self.modulus;
        }
        self.with_number(diff)
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert!(self.same_field(other), "field elements of different fields");
        self.with_number(&(&self.number * &other.number) % &*self.modulus)
    }

    /// Square this element
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Double this element
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Additive inverse, `0 - self`
    pub fn negate(&self) -> Self {
        Self::zero(&self.modulus).sub(self)
    }

    /// Multiplicative inverse via the Extended Euclidean Algorithm
    ///
    /// Fails with [`Error::NotInvertible`] when `gcd(self, p) != 1`, which
    /// includes zero.
    pub fn invert(&self) -> Result<Self> {
        let modulus = &*self.modulus;

        let (mut old_r, mut r) = (self.number.clone(), modulus.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

        while !r.is_zero() {
            let (quotient, remainder) = BigInt::divide(&old_r, &r)?;
            old_r = core::mem::replace(&mut r, remainder);
            let next_s = &old_s - &(&quotient * &s);
            old_s = core::mem::replace(&mut s, next_s);
        }

        if old_r != BigInt::one() {
            return Err(Error::NotInvertible {
                context: "field inverse",
            });
        }
        if old_s.is_negative() {
            old_s += modulus;
        }
        Ok(self.with_number(old_s))
    }

    /// Field division, `self * other^-1`
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.invert()?))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.same_field(other)
    }
}

impl Eq for FieldElement {}

impl PartialEq<BigInt> for FieldElement {
    fn eq(&self, other: &BigInt) -> bool {
        self.number == *other
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} mod {})", self.number, self.modulus)
    }
}
