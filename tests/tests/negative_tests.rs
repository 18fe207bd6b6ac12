//! Malformed input and missing key material

use ecctool::prelude::*;
use ecctool_tests::{keyed_alg, seeded_rng, test_alg};

#[test]
fn test_verify_never_errors_on_garbage() {
    let alg = keyed_alg("secp256k1", 21);
    let signature = alg.sign(b"payload", &mut seeded_rng(22)).unwrap();
    assert_eq!(signature.len(), 65);
    assert!(alg.verify(b"payload", &signature));

    let candidates: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0x04],
        signature[..64].to_vec(),
        vec![0u8; 65],
        vec![0xff; 65],
        [&[0x02][..], &signature[1..]].concat(),
        [&signature[..], &[0x00][..]].concat(),
    ];
    for candidate in &candidates {
        assert!(!alg.verify(b"payload", candidate));
    }
}

#[test]
fn test_decrypt_failure_modes() {
    let alg = keyed_alg("secp112r1", 23);
    let header = alg.curve().point_byte_size();

    for len in [0, 1, header - 1] {
        assert!(matches!(
            alg.decrypt(&vec![0x04; len]),
            Err(Error::Parse { .. })
        ));
    }

    // A header of the right size that is not a curve point
    let mut ciphertext = alg.encrypt(b"abc", &mut seeded_rng(24)).unwrap();
    ciphertext[header - 1] ^= 0x01;
    assert!(matches!(
        alg.decrypt(&ciphertext),
        Err(Error::PointNotOnCurve { .. })
    ));

    // Infinity is never a valid header
    let mut infinity = vec![0u8; header];
    infinity.extend_from_slice(b"abc");
    assert!(matches!(
        alg.decrypt(&infinity),
        Err(Error::InvalidFormat { .. })
    ));
}

#[test]
fn test_operations_without_keys() {
    let alg = test_alg("secp112r1");
    let mut rng = seeded_rng(25);

    assert!(matches!(
        alg.sign(b"m", &mut rng),
        Err(Error::NoPrivateKey { .. })
    ));
    assert!(matches!(
        alg.encrypt(b"m", &mut rng),
        Err(Error::NoPublicKey { .. })
    ));
    assert!(matches!(
        alg.decrypt(&[0x04; 40]),
        Err(Error::NoPrivateKey { .. })
    ));
    assert!(matches!(
        alg.keys_to_string(false),
        Err(Error::NoPublicKey { .. })
    ));
    assert!(matches!(
        KeySerializer.serialize_public_keys(&alg),
        Err(Error::NoPublicKey { .. })
    ));

    let public_only = {
        let mut alg = test_alg("secp112r1");
        alg.set_public_key(&keyed_alg("secp112r1", 26).public_key_bytes().unwrap())
            .unwrap();
        alg
    };
    assert!(public_only.keys_to_string(false).is_ok());
    assert!(matches!(
        public_only.keys_to_string(true),
        Err(Error::NoPrivateKey { .. })
    ));
    assert!(matches!(
        KeySerializer.serialize_private_keys(&public_only),
        Err(Error::NoPrivateKey { .. })
    ));
}

#[test]
fn test_malformed_key_records() {
    let alg = keyed_alg("secp112r1", 27);
    let public_hex = hex::encode(alg.public_key_bytes().unwrap());

    let records = [
        String::new(),
        "secp112r1".to_string(),
        format!("secp112r1:{}", public_hex),
        format!("secp112r1:[{}", public_hex),
        "secp112r1:[]".to_string(),
        "secp112r1:[:01]".to_string(),
        format!("secp112r1:[{}x]", public_hex),
        format!("secp112r1:[{}:zz]", public_hex),
        format!("secp112r1:[{}:01:02]", public_hex),
    ];
    for record in &records {
        assert!(
            matches!(KeySerializer.parse_keys(record), Err(Error::Parse { .. })),
            "{:?}",
            record
        );
    }

    // Key sizes are checked against the named curve
    let foreign = format!("secp256k1:[{}]", public_hex);
    assert!(matches!(
        KeySerializer.parse_keys(&foreign),
        Err(Error::Parse { .. })
    ));

    // A private key that does not match the public key
    let mismatched = format!("secp112r1:[{}:01]", public_hex);
    assert!(matches!(
        KeySerializer.parse_keys(&mismatched),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_point_parsing_rejections() {
    let curve = EllipticCurve::from_name("secp112r1").unwrap();
    let p = curve.field_modulus();
    let width = curve.point_byte_size();

    // Coordinates at or above the modulus are not reduced
    let mut oversized = vec![0x04];
    oversized.extend_from_slice(p.magnitude_bytes());
    oversized.extend_from_slice(&vec![0u8; (width - 1) / 2]);
    assert!(matches!(
        Point::parse(&oversized, 0, p),
        Err(ecctool::algorithms::Error::Parse { .. })
    ));

    let compressed = [&[0x03][..], &vec![0x11; (width - 1) / 2]].concat();
    assert!(matches!(
        Point::parse(&compressed, 0, p),
        Err(ecctool::algorithms::Error::NotImplemented { .. })
    ));
    assert!(matches!(
        curve.base_point().serialize_with(PointFormat::Compressed),
        Err(ecctool::algorithms::Error::NotImplemented { .. })
    ));

    let encoded = curve.base_point().serialize();
    assert!(Point::parse(&encoded[..width - 1], 0, p).is_err());
}

#[test]
fn test_negative_scalar_is_rejected() {
    let curve = EllipticCurve::from_name("secp112r1").unwrap();
    let minus_one = -BigInt::one();
    assert!(matches!(
        curve.multiply_point_with_scalar(curve.base_point(), &minus_one),
        Err(ecctool::algorithms::Error::Parameter { .. })
    ));
    assert!(curve
        .multiply_point_with_scalar(curve.base_point(), &BigInt::zero())
        .unwrap()
        .is_infinity());
}
