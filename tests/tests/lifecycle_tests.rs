use ecshim::prelude::*;
use ecshim_tests::*;

#[test]
fn test_handle_states() {
    init_tracing();
    let ec = bridge();
    let empty: KeyHandle<SoftwareProvider> = EcKey::default();
    assert_eq!(empty.state(), KeyState::Uninitialized);
    assert_eq!(empty.kind(), None);
    assert_eq!(empty.width(), None);

    let (mut private, mut public) = key_pair(&ec);
    assert_eq!(private.state(), KeyState::Valid(KeyKind::Private));
    assert_eq!(public.state(), KeyState::Valid(KeyKind::Public));

    ec.free_private_key(&mut private).unwrap();
    ec.free_public_key(&mut public).unwrap();
    assert_eq!(private.state(), KeyState::Freed);
    assert_eq!(public.state(), KeyState::Freed);
}

#[test]
fn test_free_requires_a_valid_handle_of_the_right_kind() {
    init_tracing();
    let ec = bridge();
    let (mut private, mut public) = key_pair(&ec);

    let err = ec.free_public_key(&mut private).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert!(private.is_valid(KeyKind::Private));

    let err = ec.free_private_key(&mut public).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert!(public.is_valid(KeyKind::Public));

    ec.free_private_key(&mut private).unwrap();
    let err = ec.free_private_key(&mut private).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let mut empty: KeyHandle<SoftwareProvider> = EcKey::default();
    assert_eq!(empty.free().unwrap_err().kind(), ErrorKind::InvalidParameter);
}

#[test]
fn test_freed_handles_are_rejected_everywhere() {
    init_tracing();
    let ec = bridge();
    let (mut private, mut public) = key_pair(&ec);
    let (_, other) = key_pair(&ec);
    let digest = sha256(b"freed");
    let der = ec.sign_to_vec(&private, &digest).unwrap();

    private.free().unwrap();
    public.free().unwrap();

    let invalid = ErrorKind::InvalidParameter;
    assert_eq!(ec.sign(&private, &digest, None).unwrap_err().kind(), invalid);
    assert_eq!(ec.verify(&public, &digest, &der).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_from_private(&private).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_to_der(&public, None).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_coordinates(&public).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_equal(&public, &other).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_equal(&other, &public).unwrap_err().kind(), invalid);
}

#[test]
fn test_uninitialized_handles_are_rejected_everywhere() {
    init_tracing();
    let ec = bridge();
    let (private, public) = key_pair(&ec);
    let empty: KeyHandle<SoftwareProvider> = EcKey::default();
    let digest = sha256(b"uninitialized");
    let der = ec.sign_to_vec(&private, &digest).unwrap();

    let invalid = ErrorKind::InvalidParameter;
    let mut out = [0u8; 128];
    assert_eq!(ec.sign(&empty, &digest, None).unwrap_err().kind(), invalid);
    assert_eq!(ec.sign(&empty, &digest, Some(&mut out[..])).unwrap_err().kind(), invalid);
    assert_eq!(ec.verify(&empty, &digest, &der).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_from_private(&empty).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_to_der(&empty, None).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_coordinates(&empty).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_equal(&empty, &public).unwrap_err().kind(), invalid);
    assert_eq!(ec.public_key_equal(&public, &empty).unwrap_err().kind(), invalid);

    let mut empty = empty;
    assert_eq!(ec.free_private_key(&mut empty).unwrap_err().kind(), invalid);
    assert_eq!(ec.free_public_key(&mut empty).unwrap_err().kind(), invalid);
    assert_eq!(empty.state(), KeyState::Uninitialized);
}

#[test]
fn test_public_key_equality() {
    init_tracing();
    let ec = bridge();
    let (private, from_der) = key_pair(&ec);
    let derived = ec.public_key_from_private(&private).unwrap();
    let from_coordinates = ec
        .public_key_from_coordinates(CurveType::Secp256r1, &unhex(P256_QX), &unhex(P256_QY))
        .unwrap();
    let unrelated = ec
        .public_key_from_coordinates(CurveType::Secp256r1, &[0x01; 32], &[0x01; 32])
        .unwrap();

    assert!(ec.public_key_equal(&from_der, &derived).unwrap());
    assert!(ec.public_key_equal(&derived, &from_coordinates).unwrap());
    assert!(!ec.public_key_equal(&from_der, &unrelated).unwrap());

    // a private handle is not a public key
    let err = ec.public_key_equal(&private, &from_der).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn test_unsupported_operations() {
    init_tracing();
    let ec = bridge();
    let (private, _) = key_pair(&ec);

    let unsupported = ErrorKind::Unsupported;
    assert_eq!(ec.generate_key_pair(DEFAULT_CURVE).unwrap_err().kind(), unsupported);
    assert_eq!(
        ec.generate_key_pair_from_private(DEFAULT_CURVE, &unhex(P256_D))
            .unwrap_err()
            .kind(),
        unsupported
    );
    let mut out = [0u8; 256];
    assert_eq!(
        ec.private_key_to_der(&private, Some(&mut out[..])).unwrap_err().kind(),
        unsupported
    );
    assert_eq!(
        ec.is_valid_raw_private_key(DEFAULT_CURVE, &unhex(P256_D))
            .unwrap_err()
            .kind(),
        unsupported
    );
}
