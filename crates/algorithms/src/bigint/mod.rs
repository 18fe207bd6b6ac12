//! Arbitrary-precision signed integers
//!
//! A [`BigInt`] is a sign flag plus a big-endian magnitude of bytes. The
//! magnitude is never empty and carries no superfluous leading zero byte;
//! zero is the single byte `0x00` and is always positive.
//!
//! Arithmetic is schoolbook over byte digits. Division is binary long
//! division on magnitudes, and `%` always yields a remainder in
//! `[0, |divisor|)` regardless of operand signs, which the field layer
//! relies on.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};
use core::str::FromStr;

use zeroize::Zeroize;

use crate::error::{validate, Error, Result};


/// Arbitrary-precision signed integer
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u8>,
}

impl BigInt {
    /// The integer 0
    pub fn zero() -> Self {
        Self {
            negative: false,
            magnitude: vec![0],
        }
    }

    /// The integer 1
    pub fn one() -> Self {
        Self {
            negative: false,
            magnitude: vec![1],
        }
    }

    /// Build an integer from a big-endian magnitude and a sign flag
    ///
    /// Leading zero bytes are trimmed and a zero magnitude is always
    /// positive, whatever `negative` says.
    pub fn from_bytes_be(bytes: &[u8], negative: bool) -> Self {
        let mut value = Self {
            negative,
            magnitude: bytes.to_vec(),
        };
        value.normalize();
        value
    }

    /// Parse a hexadecimal string with an optional leading `-`
    ///
    /// Whitespace anywhere in the input is ignored. An odd number of digits
    /// is padded from the most-significant end.
    pub fn from_hex(input: &str) -> Result<Self> {
        let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        if digits.is_empty() {
            return Err(Error::parse("hexadecimal integer", "no digits"));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::parse(
                "hexadecimal integer",
                format!("invalid digit '{}'", bad),
            ));
        }

        let padded = if digits.len() % 2 == 1 {
            format!("0{}", digits)
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(&padded)
            .map_err(|e| Error::parse("hexadecimal integer", e.to_string()))?;

        Ok(Self::from_bytes_be(&bytes, negative))
    }

    /// Big-endian magnitude, without sign
    pub fn magnitude_bytes(&self) -> &[u8] {
        &self.magnitude
    }

    /// Magnitude left-padded with zeros to exactly `width` bytes
    pub fn to_padded_bytes(&self, width: usize) -> Result<Vec<u8>> {
        let significant: &[u8] = if self.is_zero() { &[] } else { &self.magnitude };
        validate::parameter(
            significant.len() <= width,
            "width",
            "integer does not fit in the requested width",
        )?;
        let mut out = vec![0u8; width];
        out[width - significant.len()..].copy_from_slice(significant);
        Ok(out)
    }

    /// Whether the value is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.len() == 1 && self.magnitude[0] == 0
    }

    /// Whether the value is strictly negative
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Flip the sign in place; zero stays positive
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Add one in place
    pub fn increment(&mut self) {
        *self += BigInt::one();
    }

    /// Subtract one in place
    pub fn decrement(&mut self) {
        *self -= BigInt::one();
    }

    /// Compare magnitudes, ignoring sign
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        cmp_magnitudes(&self.magnitude, &other.magnitude)
    }

    /// Bit `index` of the magnitude, counting from the least-significant bit
    pub fn get_bit_at(&self, index: usize) -> bool {
        let byte = index / 8;
        if byte >= self.magnitude.len() {
            return false;
        }
        let pos = self.magnitude.len() - 1 - byte;
        (self.magnitude[pos] >> (index % 8)) & 1 == 1
    }

    /// Set bit `index` of the magnitude, growing it if needed
    pub fn set_bit_at(&mut self, index: usize) {
        let byte = index / 8;
        if byte >= self.magnitude.len() {
            let mut grown = vec![0u8; byte + 1 - self.magnitude.len()];
            grown.extend_from_slice(&self.magnitude);
            self.magnitude = grown;
        }
        let pos = self.magnitude.len() - 1 - byte;
        self.magnitude[pos] |= 1 << (index % 8);
    }

    /// Clear bit `index` of the magnitude
    pub fn clear_bit_at(&mut self, index: usize) {
        let byte = index / 8;
        if byte >= self.magnitude.len() {
            return;
        }
        let pos = self.magnitude.len() - 1 - byte;
        self.magnitude[pos] &= !(1 << (index % 8));
        self.normalize();
    }

    /// Position of the most-significant set bit plus one; zero for zero
    pub fn bit_size(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let top = self.magnitude[0];
        (self.magnitude.len() - 1) * 8 + (8 - top.leading_zeros() as usize)
    }

    /// Index of the most-significant set bit, `None` for zero
    pub fn most_significant_bit_index(&self) -> Option<usize> {
        self.bit_size().checked_sub(1)
    }

    /// Quotient and remainder of the magnitudes
    ///
    /// Binary long division: walking the numerator from its top bit, the
    /// running remainder is shifted left, the next bit injected, and the
    /// divisor subtracted whenever it fits. The first `bits(divisor) - 1`
    /// numerator bits can never reach the divisor, so they are loaded into
    /// the remainder in one step. Both results are non-negative.
    pub fn divide(numerator: &BigInt, denominator: &BigInt) -> Result<(BigInt, BigInt)> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if numerator.compare_magnitude(denominator) == Ordering::Less {
            return Ok((BigInt::zero(), numerator.abs()));
        }

        let divisor = denominator.abs();
        let numerator_bits = numerator.bit_size();
        let preload = divisor.bit_size() - 1;

        let mut remainder = numerator.abs() >> (numerator_bits - preload);
        let mut quotient = BigInt::zero();

        for index in (0..numerator_bits - preload).rev() {
            remainder <<= 1;
            if numerator.get_bit_at(index) {
                remainder.set_bit_at(0);
            }
            if remainder.compare_magnitude(&divisor) != Ordering::Less {
                remainder.magnitude = sub_magnitudes(&remainder.magnitude, &divisor.magnitude);
                remainder.normalize();
                quotient.set_bit_at(index);
            }
        }

        Ok((quotient, remainder))
    }

    /// Restore the representation invariants after a raw edit
    fn normalize(&mut self) {
        let leading = self
            .magnitude
            .iter()
            .take_while(|&&b| b == 0)
            .count();
        if leading == self.magnitude.len() {
            self.magnitude.clear();
            self.magnitude.push(0);
            self.negative = false;
        } else if leading > 0 {
            self.magnitude.drain(..leading);
        }
    }

    fn with_magnitude(negative: bool, magnitude: Vec<u8>) -> Self {
        let mut value = Self {
            negative,
            magnitude,
        };
        value.normalize();
        value
    }

    fn plus(&self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return Self::with_magnitude(
                self.negative,
                add_magnitudes(&self.magnitude, &rhs.magnitude),
            );
        }
        match self.compare_magnitude(rhs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => Self::with_magnitude(
                self.negative,
                sub_magnitudes(&self.magnitude, &rhs.magnitude),
            ),
            Ordering::Less => Self::with_magnitude(
                rhs.negative,
                sub_magnitudes(&rhs.magnitude, &self.magnitude),
            ),
        }
    }

    fn minus(&self, rhs: &BigInt) -> BigInt {
        self.plus(&-rhs)
    }

    fn times(&self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        Self::with_magnitude(
            self.negative != rhs.negative,
            mul_magnitudes(&self.magnitude, &rhs.magnitude),
        )
    }

    fn quotient(&self, rhs: &BigInt) -> BigInt {
        match BigInt::divide(self, rhs) {
            Ok((mut q, _)) => {
                if self.negative != rhs.negative {
                    q.negate();
                }
                q
            }
            Err(_) => panic!("attempt to divide a BigInt by zero"),
        }
    }

    fn remainder(&self, rhs: &BigInt) -> BigInt {
        match BigInt::divide(self, rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("attempt to calculate the remainder of a BigInt with a divisor of zero"),
        }
    }
}

fn cmp_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut lhs = a.iter().rev();
    let mut rhs = b.iter().rev();
    let mut carry = 0u16;
    loop {
        let (x, y) = match (lhs.next(), rhs.next()) {
            (None, None) => break,
            (x, y) => (x.copied().unwrap_or(0), y.copied().unwrap_or(0)),
        };
        let sum = x as u16 + y as u16 + carry;
        out.push(sum as u8);
        carry = sum >> 8;
    }
    if carry != 0 {
        out.push(carry as u8);
    }
    out.reverse();
    out
}

/// `minuend - subtrahend` on magnitudes; the minuend must not be smaller
fn sub_magnitudes(minuend: &[u8], subtrahend: &[u8]) -> Vec<u8> {
    assert!(
        cmp_magnitudes(minuend, subtrahend) != Ordering::Less,
        "magnitude subtraction would underflow"
    );
    let mut out = minuend.to_vec();
    let mut borrow = 0i16;
    for i in 0..out.len() {
        let pos = out.len() - 1 - i;
        let digit = if i < subtrahend.len() {
            subtrahend[subtrahend.len() - 1 - i] as i16
        } else if borrow == 0 {
            break;
        } else {
            0
        };
        let mut diff = out[pos] as i16 - digit - borrow;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[pos] = diff as u8;
    }
    out
}

/// Schoolbook product; each row of the shorter operand is accumulated in place
fn mul_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (top, bottom) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let width = top.len() + bottom.len();
    let mut acc = vec![0u8; width];

    for (j, &digit) in bottom.iter().rev().enumerate() {
        if digit == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (i, &t) in top.iter().rev().enumerate() {
            let pos = width - 1 - (i + j);
            let v = acc[pos] as u32 + t as u32 * digit as u32 + carry;
            acc[pos] = v as u8;
            carry = v >> 8;
        }
        let mut pos = width - 1 - (top.len() + j);
        while carry != 0 {
            let v = acc[pos] as u32 + carry;
            acc[pos] = v as u8;
            carry = v >> 8;
            if pos == 0 {
                break;
            }
            pos -= 1;
        }
    }
    acc
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_magnitude(other),
            (true, true) => self.compare_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_hex(s)
    }
}

/// Lowercase hexadecimal, two digits per byte, optional leading `-`
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&hex::encode(&self.magnitude))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.magnitude.push(0);
        self.negative = false;
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_bytes_be(&value.to_be_bytes(), false)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_bytes_be(&value.unsigned_abs().to_be_bytes(), value < 0)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigInt> for u64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<u64> {
        validate::parameter(!value.negative, "value", "negative integers have no unsigned form")?;
        validate::parameter(value.bit_size() <= 64, "value", "integer exceeds 64 bits")?;
        Ok(value
            .magnitude
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }
}

macro_rules! impl_binary_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign_method:ident, $inner:ident) => {
        impl $Trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                self.$inner(rhs)
            }
        }

        impl $Trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                self.$inner(&rhs)
            }
        }

        impl $Trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$inner(rhs)
            }
        }

        impl $Trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$inner(&rhs)
            }
        }

        impl $AssignTrait<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = (&*self).$inner(rhs);
            }
        }

        impl $AssignTrait<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = (&*self).$inner(&rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, plus);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, minus);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, times);
impl_binary_op!(Div, div, DivAssign, div_assign, quotient);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, remainder);

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        let mut value = self.clone();
        value.negate();
        value
    }
}

/// Shifts act on the magnitude and keep the sign
impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, shift: usize) {
        if self.is_zero() || shift == 0 {
            return;
        }
        let bits = shift % 8;
        if bits != 0 {
            let mut carry = 0u8;
            for byte in self.magnitude.iter_mut().rev() {
                let spill = *byte >> (8 - bits);
                *byte = (*byte << bits) | carry;
                carry = spill;
            }
            if carry != 0 {
                self.magnitude.insert(0, carry);
            }
        }
        let len = self.magnitude.len();
        self.magnitude.resize(len + shift / 8, 0);
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, shift: usize) {
        let bytes = shift / 8;
        if bytes >= self.magnitude.len() {
            *self = BigInt::zero();
            return;
        }
        let len = self.magnitude.len();
        self.magnitude.truncate(len - bytes);
        let bits = shift % 8;
        if bits != 0 {
            let mut carry = 0u8;
            for byte in self.magnitude.iter_mut() {
                let spill = *byte << (8 - bits);
                *byte = (*byte >> bits) | carry;
                carry = spill;
            }
        }
        self.normalize();
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;
    fn shl(mut self, shift: usize) -> BigInt {
        self <<= shift;
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;
    fn shl(self, shift: usize) -> BigInt {
        self.clone() << shift
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;
    fn shr(mut self, shift: usize) -> BigInt {
        self >>= shift;
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;
    fn shr(self, shift: usize) -> BigInt {
        self.clone() >> shift
    }
}
