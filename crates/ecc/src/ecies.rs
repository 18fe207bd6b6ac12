//! ECIES encryption
//!
//! Ciphertext layout: `R || (plaintext XOR keystream)`, where `R = G·r` is an
//! uncompressed point and the key stream is derived from the ECDH point
//! `S = Q·r = R·d` with the KDF (password `S.x`, salt `S.y`, each as its
//! minimal big-endian magnitude without leading zero bytes). No MAC is
//! appended, so the ciphertext carries no integrity protection.

use ecctool_algorithms::Point;
use ecctool_api::{Error, HashFunction, KeyDerivationFunction, Result, ResultExt};
use log::warn;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::alg::EccAlg;

impl<H, K> EccAlg<H, K>
where
    H: HashFunction,
    K: KeyDerivationFunction,
{
    /// Encrypt `plaintext` to the public key
    pub fn encrypt<R>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>>
    where
        R: CryptoRng + RngCore,
    {
        let public_key = self.require_public_key("ECIES encrypt")?;

        let r = self.random_scalar(rng)?;
        let shared = self.curve.multiply_point_with_scalar(public_key, &r)?;
        let tag = self
            .curve
            .multiply_point_with_scalar(self.curve.base_point(), &r)?;

        let keystream = self.derive_keystream(&shared, plaintext.len())?;
        let mut out = tag.serialize();
        out.extend(plaintext.iter().zip(keystream.iter()).map(|(p, k)| p ^ k));
        Ok(out)
    }

    /// Decrypt a ciphertext produced by [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let private_key = self.require_private_key("ECIES decrypt")?;

        let header = self.curve.point_byte_size();
        if ciphertext.len() < header {
            warn!(
                "ECIES ciphertext of {} bytes is shorter than its {}-byte header",
                ciphertext.len(),
                header
            );
            return Err(Error::Parse {
                context: "ECIES ciphertext",
                message: format!(
                    "expected at least {} bytes, got {}",
                    header,
                    ciphertext.len()
                ),
            });
        }

        let tag = self
            .curve
            .make_point_from_bytes(ciphertext, 0)
            .with_context("ECIES ciphertext header")
            .map_err(|e| {
                warn!("rejected ECIES ciphertext: {}", e);
                e
            })?;
        let shared = self.curve.multiply_point_with_scalar(&tag, private_key)?;

        let body = &ciphertext[header..];
        let keystream = self.derive_keystream(&shared, body.len())?;
        Ok(body
            .iter()
            .zip(keystream.iter())
            .map(|(c, k)| c ^ k)
            .collect())
    }

    fn derive_keystream(&self, shared: &Point, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let (x, y) = match shared {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => {
                return Err(Error::Other {
                    context: "ECIES key derivation",
                    message: "shared point is the point at infinity".to_string(),
                })
            }
        };
        let password = Zeroizing::new(x.value().magnitude_bytes().to_vec());
        let salt = Zeroizing::new(y.value().magnitude_bytes().to_vec());
        let key = self.kdf.derive_key(&password, &salt, length)?;
        if key.len() != length {
            return Err(Error::Other {
                context: "ECIES key derivation",
                message: format!("KDF returned {} bytes, expected {}", key.len(), length),
            });
        }
        Ok(Zeroizing::new(key))
    }
}
