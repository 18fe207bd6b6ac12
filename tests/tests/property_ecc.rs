//! Property-based tests for the curve group law and the ECC protocols

use std::sync::Arc;

use ecctool::prelude::*;
use ecctool_tests::{keyed_alg, seeded_rng, TOY_CURVE};
use proptest::prelude::*;

fn secp112r1() -> EllipticCurve {
    EllipticCurve::from_name("secp112r1").unwrap()
}

/// Non-zero scalars of up to 112 bits
fn scalar() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u8>(), 1..=14)
        .prop_map(|bytes| BigInt::from_bytes_be(&bytes, false))
        .prop_filter("scalar must be non-zero", |k| !k.is_zero())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn multiples_stay_on_curve(k in scalar()) {
        let curve = secp112r1();
        let point = curve.multiply_point_with_scalar(curve.base_point(), &k).unwrap();
        prop_assert!(curve.check_point_on_curve(&point));
    }

    #[test]
    fn small_multiples_match_addition(k in scalar()) {
        let curve = secp112r1();
        let p = curve.multiply_point_with_scalar(curve.base_point(), &k).unwrap();

        prop_assert_eq!(
            curve.multiply_point_with_scalar(&p, &BigInt::one()).unwrap(),
            p.clone()
        );
        prop_assert_eq!(
            curve.multiply_point_with_scalar(&p, &BigInt::from(2u8)).unwrap(),
            curve.add_points(&p, &p).unwrap()
        );
    }

    #[test]
    fn scalar_multiplication_distributes(a in scalar(), b in scalar()) {
        let curve = secp112r1();
        let g = curve.base_point();
        let sum = curve
            .add_points(
                &curve.multiply_point_with_scalar(g, &a).unwrap(),
                &curve.multiply_point_with_scalar(g, &b).unwrap(),
            )
            .unwrap();
        prop_assert_eq!(curve.multiply_point_with_scalar(g, &(&a + &b)).unwrap(), sum);
    }

    #[test]
    fn point_encoding_round_trips(k in scalar()) {
        let curve = secp112r1();
        let point = curve.multiply_point_with_scalar(curve.base_point(), &k).unwrap();
        prop_assume!(!point.is_infinity());

        let bytes = point.serialize();
        prop_assert_eq!(bytes.len(), curve.point_byte_size());
        prop_assert_eq!(Point::parse(&bytes, 0, curve.field_modulus()).unwrap(), point.clone());
        prop_assert_eq!(curve.make_point_from_bytes(&bytes, 0).unwrap(), point);
    }

    #[test]
    fn sign_verify_round_trip(message in prop::collection::vec(any::<u8>(), 0..256), seed in any::<u64>()) {
        let alg = keyed_alg("secp112r1", 11);
        let signature = alg.sign(&message, &mut seeded_rng(seed)).unwrap();
        prop_assert!(alg.verify(&message, &signature));
    }

    #[test]
    fn fresh_key_pairs_sign_and_verify(seed in any::<u64>()) {
        let alg = keyed_alg("secp112r1", seed);
        let signature = alg.sign(b"fresh keys", &mut seeded_rng(seed ^ 1)).unwrap();
        prop_assert!(alg.verify(b"fresh keys", &signature));
    }

    #[test]
    fn bit_flips_invalidate_signatures(index in 1usize..29, bit in 0u8..8) {
        let alg = keyed_alg("secp112r1", 12);
        let mut signature = alg.sign(b"integrity", &mut seeded_rng(13)).unwrap();
        signature[index] ^= 1 << bit;
        prop_assert!(!alg.verify(b"integrity", &signature));
    }

    #[test]
    fn ecies_round_trip(plaintext in prop::collection::vec(any::<u8>(), 0..128), seed in any::<u64>()) {
        let alg = keyed_alg("secp112r1", 14);
        let ciphertext = alg.encrypt(&plaintext, &mut seeded_rng(seed)).unwrap();
        prop_assert_eq!(alg.decrypt(&ciphertext).unwrap(), plaintext);
    }
}

proptest! {
    #[test]
    fn toy_multiples_cycle_with_the_order(k in 0u64..1000) {
        let curve = EllipticCurve::new(&TOY_CURVE).unwrap();
        let g = curve.base_point();
        prop_assert_eq!(
            curve.multiply_point_with_scalar(g, &BigInt::from(k)).unwrap(),
            curve.multiply_point_with_scalar(g, &BigInt::from(k % 19)).unwrap()
        );
    }

    #[test]
    fn field_inverse_is_multiplicative_inverse(bytes in prop::collection::vec(any::<u8>(), 1..=32)) {
        let curve = EllipticCurve::from_name("secp256k1").unwrap();
        let p: &Arc<BigInt> = curve.field_modulus();
        let x = FieldElement::make_element(BigInt::from_bytes_be(&bytes, false), p).unwrap();
        prop_assume!(!x.is_zero());

        let product = x.mul(&x.invert().unwrap());
        prop_assert_eq!(product, FieldElement::one(p));
    }

    #[test]
    fn hex_round_trip_normalizes(bytes in prop::collection::vec(any::<u8>(), 1..40)) {
        let value = BigInt::from_bytes_be(&bytes, false);
        let text = value.to_string();
        prop_assert_eq!(text.len() % 2, 0);
        prop_assert_eq!(BigInt::from_hex(&text).unwrap(), value);
    }
}
