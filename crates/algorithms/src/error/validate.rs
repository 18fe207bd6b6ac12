//! Input checks shared by the arithmetic and curve code

use super::{Error, Result};
use crate::bigint::BigInt;

/// Fail with [`Error::Parameter`] unless `condition` holds
#[inline]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::param(name, reason))
    }
}

/// Fail with [`Error::Length`] when fewer than `min` bytes are available
#[inline]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Reject negative integers where only magnitudes make sense
#[inline]
pub fn non_negative(name: &'static str, value: &BigInt) -> Result<()> {
    parameter(!value.is_negative(), name, "must not be negative")
}

/// Reject encoded values that are not already reduced below `modulus`
pub fn reduced(context: &'static str, value: &BigInt, modulus: &BigInt) -> Result<()> {
    if value >= modulus {
        return Err(Error::parse(context, "value is not reduced below the modulus"));
    }
    Ok(())
}
