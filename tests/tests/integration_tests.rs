//! End-to-end scenarios across the ecctool crates

use ecctool::prelude::*;
use ecctool_tests::{keyed_alg, seeded_rng, TOY_CURVE, TOY_MULTIPLES};

fn affine(curve: &EllipticCurve, x: &str, y: &str) -> Point {
    curve
        .make_point(BigInt::from_hex(x).unwrap(), BigInt::from_hex(y).unwrap())
        .unwrap()
}

#[test]
fn test_toy_curve_walkthrough() {
    let curve = EllipticCurve::new(&TOY_CURVE).unwrap();
    let g = curve.base_point().clone();

    // Repeated addition and scalar multiplication agree on the whole group
    let mut running = Point::infinity();
    for (k, (x, y)) in (1u64..).zip(TOY_MULTIPLES) {
        running = curve.add_points(&running, &g).unwrap();
        let expected = curve.make_point(BigInt::from(x), BigInt::from(y)).unwrap();
        assert_eq!(running, expected, "{}·G", k);
        assert_eq!(
            curve.multiply_point_with_scalar(&g, &BigInt::from(k)).unwrap(),
            expected
        );
    }

    let order = curve.base_point_order().clone();
    assert!(curve
        .multiply_point_with_scalar(&g, &order)
        .unwrap()
        .is_infinity());
    assert!(curve.add_points(&running, &g).unwrap().is_infinity());

    // 18·G is the inverse of G
    assert_eq!(curve.invert_point(&g), running);
}

#[test]
fn test_secp112r1_five_times_base_point() {
    let curve = EllipticCurve::from_name("secp112r1").unwrap();
    let five_g = curve
        .multiply_point_with_scalar(curve.base_point(), &BigInt::from(5u32))
        .unwrap();

    assert_eq!(
        five_g,
        affine(
            &curve,
            "ca188ca33fde3ce02a83f197547c",
            "ab5c59cb715e2ddc3e51ad252a5f"
        )
    );
    assert_eq!(
        hex::encode(five_g.serialize()),
        "04ca188ca33fde3ce02a83f197547cab5c59cb715e2ddc3e51ad252a5f"
    );
}

#[test]
fn test_secp256k1_doubling() {
    let curve = EllipticCurve::from_name("secp256k1").unwrap();
    let expected = affine(
        &curve,
        "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
    );

    let g = curve.base_point();
    assert_eq!(curve.double_point(g).unwrap(), expected);
    assert_eq!(curve.add_points(g, g).unwrap(), expected);
    assert_eq!(
        curve
            .multiply_point_with_scalar(g, &BigInt::from(2u8))
            .unwrap(),
        expected
    );
}

#[test]
fn test_base_point_order_annihilates_generator() {
    for name in supported_curves() {
        let curve = EllipticCurve::from_name(name).unwrap();
        let n_g = curve
            .multiply_point_with_scalar(curve.base_point(), curve.base_point_order())
            .unwrap();
        assert!(n_g.is_infinity(), "n·G on {}", name);

        let n_minus_one = curve.base_point_order() - BigInt::one();
        assert_eq!(
            curve
                .multiply_point_with_scalar(curve.base_point(), &n_minus_one)
                .unwrap(),
            curve.invert_point(curve.base_point()),
            "(n-1)·G on {}",
            name
        );
    }
}

#[test]
fn test_sign_and_verify_across_instances() {
    for name in supported_curves() {
        let signer = keyed_alg(name, 1);
        let record = KeySerializer.serialize_public_keys(&signer).unwrap();
        assert!(record.starts_with(&format!("{}:[04", name)));

        let verifier = KeySerializer.parse_keys(&record).unwrap();
        assert!(!verifier.has_private_key());

        let mut rng = seeded_rng(2);
        let signature = signer.sign(b"cross-instance message", &mut rng).unwrap();
        assert!(verifier.verify(b"cross-instance message", &signature));
        assert!(!verifier.verify(b"cross-instance massage", &signature));
    }
}

#[test]
fn test_encrypt_to_parsed_public_key() {
    let owner = keyed_alg("secp112r1", 3);
    let public_record = KeySerializer.serialize_public_keys(&owner).unwrap();
    let private_record = KeySerializer.serialize_private_keys(&owner).unwrap();

    // Both sides parsed from records share the default KDF
    let sender = KeySerializer.parse_keys(&public_record).unwrap();
    let receiver = KeySerializer.parse_keys(&private_record).unwrap();
    assert_eq!(
        *receiver.private_key_bytes().unwrap(),
        *owner.private_key_bytes().unwrap()
    );

    let mut rng = seeded_rng(4);
    let plaintext = b"meet me by the second lamp post";
    let ciphertext = sender.encrypt(plaintext, &mut rng).unwrap();
    assert_eq!(
        ciphertext.len(),
        owner.curve().point_byte_size() + plaintext.len()
    );
    assert_eq!(receiver.decrypt(&ciphertext).unwrap(), plaintext);

    // The test instance uses a different KDF cost, so the key stream differs
    assert_ne!(owner.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_keys_to_string_matches_encodings() {
    let alg = keyed_alg("secp112r1", 5);
    let public_hex = hex::encode(alg.public_key_bytes().unwrap());

    assert_eq!(
        alg.keys_to_string(false).unwrap(),
        format!("Public: {}", public_hex)
    );

    let full = alg.keys_to_string(true).unwrap();
    let (public_line, private_line) = full.split_once('\n').unwrap();
    assert_eq!(public_line, format!("Public: {}", public_hex));
    let private_hex = private_line.strip_prefix("Private: ").unwrap();
    assert_eq!(
        BigInt::from_hex(private_hex).unwrap(),
        BigInt::from_bytes_be(&alg.private_key_bytes().unwrap(), false)
    );
}

#[test]
fn test_custom_domain_parameters() {
    let broken = DomainParameters {
        g: "04 05 02",
        ..TOY_CURVE
    };
    assert!(matches!(
        EllipticCurve::new(&broken),
        Err(ecctool::algorithms::Error::InvalidCurveParameters { .. })
    ));

    let bad_hex = DomainParameters {
        p: "1g",
        ..TOY_CURVE
    };
    assert!(EllipticCurve::new(&bad_hex).is_err());

    // Errors surface through the public type with their category intact
    let err: Error = EllipticCurve::new(&broken).unwrap_err().into();
    assert!(matches!(err, Error::InvalidCurveParameters { ref curve, .. } if curve == "toy17"));
}

#[test]
fn test_unknown_curve_name() {
    assert_eq!(
        EccAlg::from_curve_name("prime256v1").unwrap_err(),
        Error::UnsupportedCurve {
            name: "prime256v1".to_string()
        }
    );
    assert!(curve_by_name("prime256v1").is_none());
}

#[test]
fn test_custom_curve_protocols() {
    let mut rng = seeded_rng(6);
    let mut alg = EccAlg::new(EllipticCurve::new(&TOY_CURVE).unwrap());
    alg.generate_keys(&mut rng).unwrap();

    let signature = alg.sign(b"tiny", &mut rng).unwrap();
    assert_eq!(signature.len(), 3);
    assert!(alg.verify(b"tiny", &signature));
}
