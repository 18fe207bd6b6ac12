//! Textual key records
//!
//! Format: `<curve>:[<public>]` for a public key and
//! `<curve>:[<public>:<private>]` for a key pair, with both keys hex-encoded.
//! `<curve>:[<public>:]` is read as a public-only record.

use ecctool_api::{Error, HashFunction, KeyDerivationFunction, Result};
use zeroize::Zeroizing;

use crate::alg::EccAlg;

const DELIMITER: char = ':';

/// Reads and writes key records
#[derive(Clone, Copy, Debug, Default)]
pub struct KeySerializer;

fn malformed(message: &str) -> Error {
    Error::Parse {
        context: "key record",
        message: message.to_string(),
    }
}

fn decode(field: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(field).map_err(|e| Error::Parse {
        context: "key record",
        message: format!("{} is not valid hex: {}", what, e),
    })
}

impl KeySerializer {
    /// `<curve>:[<public>]`
    pub fn serialize_public_keys<H, K>(&self, alg: &EccAlg<H, K>) -> Result<String>
    where
        H: HashFunction,
        K: KeyDerivationFunction,
    {
        Ok(format!(
            "{}{}[{}]",
            alg.curve_name(),
            DELIMITER,
            hex::encode(alg.public_key_bytes()?)
        ))
    }

    /// `<curve>:[<public>:<private>]`
    pub fn serialize_private_keys<H, K>(&self, alg: &EccAlg<H, K>) -> Result<Zeroizing<String>>
    where
        H: HashFunction,
        K: KeyDerivationFunction,
    {
        let private = alg.private_key_bytes()?;
        Ok(Zeroizing::new(format!(
            "{}{}[{}{}{}]",
            alg.curve_name(),
            DELIMITER,
            hex::encode(alg.public_key_bytes()?),
            DELIMITER,
            hex::encode(&*private)
        )))
    }

    /// Parse a record into an [`EccAlg`] over the named curve
    pub fn parse_keys(&self, record: &str) -> Result<EccAlg> {
        let record = record.trim();
        let (curve_name, keys) = record
            .split_once(DELIMITER)
            .ok_or_else(|| malformed("missing curve name delimiter"))?;

        let mut alg = EccAlg::from_curve_name(curve_name)?;

        let keys = keys
            .strip_prefix('[')
            .and_then(|k| k.strip_suffix(']'))
            .ok_or_else(|| malformed("missing outer bracket delimiters"))?;

        let (public_hex, private_hex) = match keys.split_once(DELIMITER) {
            Some((public, private)) => (public, private),
            None => (keys, ""),
        };
        if private_hex.contains(DELIMITER) {
            return Err(malformed("unexpected data after the private key"));
        }
        if public_hex.is_empty() {
            return Err(malformed("missing public key"));
        }

        let public = decode(public_hex, "public key")?;
        if private_hex.is_empty() {
            alg.set_public_key(&public)?;
        } else {
            let private = Zeroizing::new(decode(private_hex, "private key")?);
            alg.set_key_pair(&public, &private)?;
        }
        Ok(alg)
    }
}
