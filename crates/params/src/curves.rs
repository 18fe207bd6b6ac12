//! Named curve domain parameters
//!
//! Values are reproduced from SEC 2: Recommended Elliptic Curve Domain
//! Parameters. Big-number fields are hexadecimal strings; whitespace inside
//! them is ignored by the parser.

/// Domain parameters of a short-Weierstrass curve `y^2 = x^3 + ax + b (mod p)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainParameters {
    /// Human-readable curve name
    pub name: &'static str,
    /// Prime modulus of the underlying field
    pub p: &'static str,
    /// Curve coefficient a
    pub a: &'static str,
    /// Curve coefficient b
    pub b: &'static str,
    /// Base point G, serialized uncompressed (`04 || x || y`)
    pub g: &'static str,
    /// Order of the base point
    pub n: &'static str,
    /// Cofactor
    pub h: &'static str,
}

/// secp112r1
pub const SECP112R1: DomainParameters = DomainParameters {
    name: "secp112r1",
    p: "DB7C 2ABF62E3 5E668076 BEAD208B",
    a: "DB7C 2ABF62E3 5E668076 BEAD2088",
    b: "659E F8BA0439 16EEDE89 11702B22",
    g: "04 09487239 995A5EE7 6B55F9C2 F098A89C E5AF8724 C0A23E0E 0FF77500",
    n: "DB7C 2ABF62E3 5E7628DF AC6561C5",
    h: "01",
};

/// secp256k1
pub const SECP256K1: DomainParameters = DomainParameters {
    name: "secp256k1",
    p: "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F",
    a: "00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000",
    b: "00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000007",
    g: "04 79BE667E F9DCBBAC 55A06295 CE870B07 029BFCDB 2DCE28D9 59F2815B 16F81798 \
        483ADA77 26A3C465 5DA4FBFC 0E1108A8 FD17B448 A6855419 9C47D08F FB10D4B8",
    n: "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141",
    h: "01",
};

/// Every curve that can be selected by name
pub const SUPPORTED_CURVES: &[&DomainParameters] = &[&SECP112R1, &SECP256K1];

/// Names of the built-in curves, in registry order
pub fn supported_curves() -> impl Iterator<Item = &'static str> {
    SUPPORTED_CURVES.iter().map(|params| params.name)
}

/// Look up a built-in curve by its exact name
pub fn curve_by_name(name: &str) -> Option<&'static DomainParameters> {
    SUPPORTED_CURVES
        .iter()
        .copied()
        .find(|params| params.name == name)
}
