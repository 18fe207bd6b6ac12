//! Random scalar generation

use ecctool_algorithms::BigInt;
use ecctool_api::{Error, Result};
use rand::{CryptoRng, RngCore};


/// Draw a random integer in `(0, max)`
///
/// Builds `bits(max)` random bits from the most-significant end. A candidate
/// at or above `max` has its top bit cleared once; if it is still out of
/// range, or zero, the draw fails with [`Error::RandomRange`] rather than
/// looping.
pub fn random_positive_below<R>(max: &BigInt, rng: &mut R) -> Result<BigInt>
where
    R: CryptoRng + RngCore,
{
    let top = match max.most_significant_bit_index() {
        Some(top) if !max.is_negative() => top,
        _ => {
            return Err(Error::RandomRange {
                context: "random scalar",
                message: "upper bound must be positive".to_string(),
            })
        }
    };

    let mut candidate = BigInt::zero();
    let mut word = 0u32;
    let mut available = 0;
    for index in (0..=top).rev() {
        if available == 0 {
            word = rng.next_u32();
            available = 32;
        }
        if word & 1 == 1 {
            candidate.set_bit_at(index);
        }
        word >>= 1;
        available -= 1;
    }

    if candidate >= *max {
        candidate.clear_bit_at(top);
    }
    if candidate >= *max || candidate.is_zero() {
        return Err(Error::RandomRange {
            context: "random scalar",
            message: "candidate outside (0, max)".to_string(),
        });
    }
    Ok(candidate)
}
