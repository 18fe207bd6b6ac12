//! Curve plus key pair

use core::fmt;

use ecctool_algorithms::{BigInt, EllipticCurve, Pbkdf2, Point, Sha256};
use ecctool_api::{Error, HashFunction, KeyDerivationFunction, Result, ResultExt};
use log::{debug, warn};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::random::random_positive_below;

/// Draws allowed before a degenerate random scalar is reported
const MAX_SCALAR_DRAWS: usize = 16;

/// Elliptic-curve algorithms bound to one curve and an optional key pair
///
/// An instance is either empty, public-only (after
/// [`set_public_key`](Self::set_public_key)) or holds a full key pair (after
/// [`generate_keys`](Self::generate_keys) or
/// [`set_key_pair`](Self::set_key_pair)). With a full key pair the public key
/// always equals `G * private`.
///
/// `H` hashes messages for ECDSA and `K` derives the ECIES key stream.
#[derive(Clone)]
pub struct EccAlg<H = Sha256, K = Pbkdf2> {
    pub(crate) curve: EllipticCurve,
    pub(crate) public_key: Option<Point>,
    pub(crate) private_key: Option<Zeroizing<BigInt>>,
    pub(crate) hash: H,
    pub(crate) kdf: K,
}

impl EccAlg {
    /// Algorithms over `curve` with SHA-256 and PBKDF2-HMAC-SHA256
    pub fn new(curve: EllipticCurve) -> Self {
        Self::with_capabilities(curve, Sha256::new(), Pbkdf2::new())
    }

    /// Algorithms over one of the built-in curves
    pub fn from_curve_name(name: &str) -> Result<Self> {
        Ok(Self::new(EllipticCurve::from_name(name)?))
    }
}

impl<H, K> EccAlg<H, K>
where
    H: HashFunction,
    K: KeyDerivationFunction,
{
    /// Algorithms over `curve` with explicit hash and KDF capabilities
    pub fn with_capabilities(curve: EllipticCurve, hash: H, kdf: K) -> Self {
        Self {
            curve,
            public_key: None,
            private_key: None,
            hash,
            kdf,
        }
    }

    /// The underlying curve
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// Name of the underlying curve
    pub fn curve_name(&self) -> &str {
        self.curve.name()
    }

    /// Generate a fresh key pair, replacing any loaded keys
    pub fn generate_keys<R>(&mut self, rng: &mut R) -> Result<()>
    where
        R: CryptoRng + RngCore,
    {
        let private = self.random_scalar(rng)?;
        let public = self
            .curve
            .multiply_point_with_scalar(self.curve.base_point(), &private)?;
        assert!(
            self.curve.check_point_on_curve(&public),
            "generated public key is not on the curve"
        );

        self.public_key = Some(public);
        self.private_key = Some(private);
        debug!("generated {} key pair", self.curve.name());
        Ok(())
    }

    /// Install a full key pair
    ///
    /// `public_key` is an uncompressed point and `private_key` a big-endian
    /// integer. The private key must lie in `(0, n)` and map to the public
    /// key, otherwise the keys are rejected with [`Error::InvalidArgument`]
    /// and the instance is left unchanged.
    pub fn set_key_pair(&mut self, public_key: &[u8], private_key: &[u8]) -> Result<()> {
        let public = self.parse_public_key(public_key)?;
        let private = Zeroizing::new(BigInt::from_bytes_be(private_key, false));

        if private.is_zero() || *private >= *self.curve.base_point_order() {
            warn!("rejected {} private key outside (0, n)", self.curve.name());
            return Err(Error::InvalidArgument {
                context: "set_key_pair",
                message: "private key must lie in (0, n)".to_string(),
            });
        }

        let derived = self
            .curve
            .multiply_point_with_scalar(self.curve.base_point(), &private)?;
        if derived != public {
            warn!(
                "rejected {} key pair: public key does not match private key",
                self.curve.name()
            );
            return Err(Error::InvalidArgument {
                context: "set_key_pair",
                message: "public key does not match private key".to_string(),
            });
        }

        self.public_key = Some(public);
        self.private_key = Some(private);
        debug!("installed {} key pair", self.curve.name());
        Ok(())
    }

    /// Install a public key only, dropping any private key
    pub fn set_public_key(&mut self, public_key: &[u8]) -> Result<()> {
        let public = self.parse_public_key(public_key)?;
        self.public_key = Some(public);
        self.private_key = None;
        debug!("installed {} public key", self.curve.name());
        Ok(())
    }

    /// The loaded public key
    pub fn public_key(&self) -> Option<&Point> {
        self.public_key.as_ref()
    }

    /// Uncompressed encoding of the public key
    pub fn public_key_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.require_public_key("public key export")?.serialize())
    }

    /// Big-endian magnitude of the private key
    pub fn private_key_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        let private = self.require_private_key("private key export")?;
        Ok(Zeroizing::new(private.magnitude_bytes().to_vec()))
    }

    /// Whether a private key is loaded
    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Render `Public: <hex>`, followed by `\nPrivate: <hex>` when asked
    pub fn keys_to_string(&self, include_private: bool) -> Result<String> {
        let mut out = format!("Public: {}", hex::encode(self.public_key_bytes()?));
        if include_private {
            let private = self.require_private_key("private key export")?;
            out.push_str(&format!("\nPrivate: {}", **private));
        }
        Ok(out)
    }

    pub(crate) fn require_public_key(&self, operation: &'static str) -> Result<&Point> {
        self.public_key
            .as_ref()
            .ok_or(Error::NoPublicKey { operation })
    }

    pub(crate) fn require_private_key(&self, operation: &'static str) -> Result<&Zeroizing<BigInt>> {
        self.private_key
            .as_ref()
            .ok_or(Error::NoPrivateKey { operation })
    }

    /// Uniform scalar in `(0, n)`, redrawing on the rare degenerate candidate
    pub(crate) fn random_scalar<R>(&self, rng: &mut R) -> Result<Zeroizing<BigInt>>
    where
        R: CryptoRng + RngCore,
    {
        let n = self.curve.base_point_order();
        let mut attempt = 1;
        loop {
            match random_positive_below(n, rng) {
                Ok(k) => return Ok(Zeroizing::new(k)),
                Err(e) if attempt >= MAX_SCALAR_DRAWS => return Err(e),
                Err(_) => {
                    debug!("random scalar draw {} out of range, redrawing", attempt);
                    attempt += 1;
                }
            }
        }
    }

    fn parse_public_key(&self, bytes: &[u8]) -> Result<Point> {
        let expected = self.curve.point_byte_size();
        if bytes.len() != expected {
            return Err(Error::Parse {
                context: "public key",
                message: format!("expected {} bytes, got {}", expected, bytes.len()),
            });
        }
        self.curve
            .make_point_from_bytes(bytes, 0)
            .with_context("public key")
    }
}

impl<H, K> fmt::Debug for EccAlg<H, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EccAlg")
            .field("curve", &self.curve.name())
            .field("public_key", &self.public_key)
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}
