use ecshim::prelude::*;
use ecshim_params::ecc::{ECDSA_PUBLIC_P256_MAGIC, ECCKEY_BLOB_HEADER_SIZE};
use ecshim_tests::*;

#[test]
fn test_every_private_encoding_yields_the_same_public_key() {
    init_tracing();
    let ec = bridge();
    let expected = ec.public_key_from_der(&spki_der()).unwrap();

    for der in [
        sec1_private_der(),
        sec1_minimal_der(),
        pkcs8_private_der(),
        pkcs8_v2_private_der(),
    ] {
        let private = ec.private_key_from_der(&der).unwrap();
        assert_eq!(private.state(), KeyState::Valid(KeyKind::Private));
        assert_eq!(private.width(), Some(32));

        let public = ec.public_key_from_private(&private).unwrap();
        assert!(ec.public_key_equal(&public, &expected).unwrap());
    }
}

#[test]
fn test_public_der_round_trip() {
    init_tracing();
    let ec = bridge();
    let key = ec.public_key_from_der(&spki_der()).unwrap();

    let err = ec.public_key_to_der(&key, None).unwrap_err();
    assert_eq!(err.required_size(), Some(91));

    let mut short = [0u8; 90];
    let err = ec.public_key_to_der(&key, Some(&mut short[..])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);

    let mut out = [0u8; 128];
    let written = ec.public_key_to_der(&key, Some(&mut out[..])).unwrap();
    assert_eq!(&out[..written], spki_der().as_slice());
    assert_eq!(ec.public_key_to_der_vec(&key).unwrap(), spki_der());
}

#[test]
fn test_coordinates_round_trip() {
    init_tracing();
    let ec = bridge();
    let key = ec
        .public_key_from_coordinates(CurveType::Secp256r1, &unhex(P256_QX), &unhex(P256_QY))
        .unwrap();

    let (x, y) = ec.public_key_coordinates(&key).unwrap();
    assert_eq!(x, unhex(P256_QX));
    assert_eq!(y, unhex(P256_QY));
    assert_eq!(ec.public_key_to_der_vec(&key).unwrap(), spki_der());
}

#[test]
fn test_arbitrary_coordinates_build_a_native_blob() {
    init_tracing();
    let blob = ecshim_ec::blob::public_blob(CurveType::Secp256r1, &[0x01; 32], &[0x01; 32]).unwrap();
    assert_eq!(blob.len(), ECCKEY_BLOB_HEADER_SIZE + 64);
    assert_eq!(&blob[..4], &ECDSA_PUBLIC_P256_MAGIC.to_le_bytes());
    assert_eq!(&blob[..4], b"ECS1");
    assert_eq!(&blob[4..8], &32u32.to_le_bytes());
    assert!(blob[8..].iter().all(|&b| b == 0x01));

    let ec = bridge();
    let key = ec
        .public_key_from_coordinates(CurveType::Secp256r1, &[0x01; 32], &[0x01; 32])
        .unwrap();
    assert!(key.is_valid(KeyKind::Public));
}

#[test]
fn test_truncated_and_trailing_der_is_rejected() {
    init_tracing();
    let ec = bridge();

    let spki = spki_der();
    let err = ec.public_key_from_der(&spki[..spki.len() - 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);

    let mut padded = sec1_private_der();
    padded.push(0x00);
    let err = ec.private_key_from_der(&padded).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);

    assert_eq!(
        ec.public_key_from_der(&[]).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
    assert_eq!(
        ec.private_key_from_der(&[]).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}

#[test]
fn test_pkcs8_interop_with_an_independent_implementation() {
    use p256::pkcs8::{DecodePrivateKey, EncodePrivateKey};

    init_tracing();
    let ec = bridge();
    let secret = p256::SecretKey::from_slice(&unhex(P256_D)).unwrap();
    let independent = secret.to_pkcs8_der().unwrap();
    let private = ec.private_key_from_der(independent.as_bytes()).unwrap();
    let public = ec.public_key_from_private(&private).unwrap();
    assert_eq!(ec.public_key_to_der_vec(&public).unwrap(), spki_der());

    let v2 = pkcs8_v2_private_der();
    assert_eq!(p256::SecretKey::from_pkcs8_der(&v2).unwrap(), secret);
    let private = ec.private_key_from_der(&v2).unwrap();
    assert_eq!(private.width(), Some(32));
}

#[test]
fn test_private_der_where_public_is_expected() {
    init_tracing();
    let ec = bridge();
    let err = ec.public_key_from_der(&sec1_private_der()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
}

#[test]
fn test_unwired_curve_oid_is_unsupported() {
    init_tracing();
    let ec = bridge();
    // secp384r1 SPKI header followed by a 97-byte uncompressed point
    let mut der = unhex("3076301006072a8648ce3d020106052b8104002203620004");
    der.extend_from_slice(&[0x01; 96]);
    let err = ec.public_key_from_der(&der).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
}
