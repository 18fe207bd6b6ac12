//! Shared fixtures for the ecctool integration tests

use ecctool_algorithms::{EllipticCurve, Pbkdf2, Sha256};
use ecctool_ecc::EccAlg;
use ecctool_params::DomainParameters;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// y^2 = x^3 + 2x + 2 over GF(17) with G = (5, 1) of prime order 19
///
/// Small enough to enumerate the whole group by hand.
pub const TOY_CURVE: DomainParameters = DomainParameters {
    name: "toy17",
    p: "11",
    a: "02",
    b: "02",
    g: "04 05 01",
    n: "13",
    h: "01",
};

/// Multiples `k·G` of the toy curve base point for `k = 1..=18`
pub const TOY_MULTIPLES: [(u64, u64); 18] = [
    (5, 1),
    (6, 3),
    (10, 6),
    (3, 1),
    (9, 16),
    (16, 13),
    (0, 6),
    (13, 7),
    (7, 6),
    (7, 11),
    (13, 10),
    (0, 11),
    (16, 4),
    (9, 1),
    (3, 16),
    (10, 11),
    (6, 14),
    (5, 16),
];

/// PBKDF2 rounds used by the test instances; the production count makes
/// ECIES tests needlessly slow
pub const TEST_KDF_ITERATIONS: u32 = 16;

/// Deterministic CSPRNG for reproducible keys
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// An empty instance over a built-in curve with a cheap KDF
pub fn test_alg(curve_name: &str) -> EccAlg<Sha256, Pbkdf2> {
    let curve = EllipticCurve::from_name(curve_name).expect("built-in curve");
    EccAlg::with_capabilities(
        curve,
        Sha256::new(),
        Pbkdf2::with_iterations(TEST_KDF_ITERATIONS).expect("non-zero iterations"),
    )
}

/// An instance holding a key pair generated from `seed`
pub fn keyed_alg(curve_name: &str, seed: u64) -> EccAlg<Sha256, Pbkdf2> {
    let mut alg = test_alg(curve_name);
    alg.generate_keys(&mut seeded_rng(seed))
        .expect("key generation should succeed");
    alg
}
