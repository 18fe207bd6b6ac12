//! ECDSA signatures
//!
//! Signatures are encoded exactly like an uncompressed point modulo the
//! group order: `0x04 || r || s`, each component zero-padded to the byte
//! width of `n`.

use ecctool_algorithms::{BigInt, FieldElement, Point};
use ecctool_api::{HashFunction, KeyDerivationFunction, Result, ResultExt};
use log::debug;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::alg::EccAlg;

impl<H, K> EccAlg<H, K>
where
    H: HashFunction,
    K: KeyDerivationFunction,
{
    /// Sign `message` with the private key
    ///
    /// 1. z = leftmost min(bits(n), bits(hash)) bits of HASH(message)
    /// 2. k random in (0, n), (x1, y1) = k·G
    /// 3. r = x1 mod n; if r = 0, pick a new k
    /// 4. s = k⁻¹(z + r·d) mod n; if s = 0, pick a new k
    pub fn sign<R>(&self, message: &[u8], rng: &mut R) -> Result<Vec<u8>>
    where
        R: CryptoRng + RngCore,
    {
        let private_key = self.require_private_key("ECDSA sign")?;
        let n = self.curve.order_modulus();

        let z = FieldElement::make_element(self.message_scalar(message)?, n)?;
        let d = FieldElement::new((**private_key).clone(), n);

        loop {
            let k = self.random_scalar(rng)?;
            let kg = self
                .curve
                .multiply_point_with_scalar(self.curve.base_point(), &k)?;
            let x1 = match kg.x() {
                Some(x) => x.value().clone(),
                None => {
                    debug!("ECDSA nonce produced the point at infinity, retrying");
                    continue;
                }
            };

            let r = FieldElement::make_element(x1, n)?;
            if r.is_zero() {
                debug!("ECDSA nonce produced r = 0, retrying");
                continue;
            }

            let k = FieldElement::new((*k).clone(), n);
            let s = z.add(&d.mul(&r)).div(&k)?;
            if s.is_zero() {
                debug!("ECDSA nonce produced s = 0, retrying");
                continue;
            }

            return Ok(Point::new(r, s).serialize());
        }
    }

    /// Check `signature` over `message` against the public key
    ///
    /// Never fails: malformed input, a missing public key and an invalid
    /// signature all yield `false`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self.check_signature(message, signature) {
            Ok(valid) => valid,
            Err(e) => {
                debug!("ECDSA signature rejected: {}", e);
                false
            }
        }
    }

    fn check_signature(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let public_key = self.require_public_key("ECDSA verify")?;
        let n = self.curve.order_modulus();

        let expected = Point::uncompressed_size(n);
        if signature.len() != expected {
            debug!(
                "ECDSA signature rejected: {} bytes, expected {}",
                signature.len(),
                expected
            );
            return Ok(false);
        }

        let (r, s) = match Point::parse(signature, 0, n).with_context("ECDSA signature")? {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => return Ok(false),
        };
        if r.is_zero() || s.is_zero() {
            debug!("ECDSA signature rejected: component outside (0, n)");
            return Ok(false);
        }

        let z = FieldElement::make_element(self.message_scalar(message)?, n)?;
        let w = s.invert()?;
        let u1 = z.mul(&w);
        let u2 = r.mul(&w);

        let check = self.curve.add_points(
            &self
                .curve
                .multiply_point_with_scalar(self.curve.base_point(), u1.value())?,
            &self
                .curve
                .multiply_point_with_scalar(public_key, u2.value())?,
        )?;
        let x = match check.x() {
            Some(x) => x.value().clone(),
            None => {
                debug!("ECDSA signature rejected: check point is the point at infinity");
                return Ok(false);
            }
        };

        let v = FieldElement::make_element(x, n)?;
        let valid: bool = r.to_bytes().ct_eq(&v.to_bytes()).into();
        if !valid {
            debug!("ECDSA signature rejected: r does not match");
        }
        Ok(valid)
    }

    /// Hash `message` and keep its leftmost `bits(n)` bits
    fn message_scalar(&self, message: &[u8]) -> Result<BigInt> {
        let digest = self.hash.digest(message)?;
        let mut z = BigInt::from_bytes_be(&digest, false);

        let hash_bits = digest.len() * 8;
        let order_bits = self.curve.base_point_order().bit_size();
        if hash_bits > order_bits {
            z >>= hash_bits - order_bits;
        }
        Ok(z)
    }
}
