use ecshim::prelude::*;
use ecshim_tests::*;
use proptest::prelude::*;

fn half(width: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), width)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_der_size_never_exceeds_bound(width in 1usize..=66, seed in any::<u64>()) {
        let r: Vec<u8> = (0..width).map(|i| (seed >> (i % 8 * 8)) as u8).collect();
        let s: Vec<u8> = r.iter().rev().map(|b| b ^ 0x80).collect();

        let required = write_der(&r, &s, None).size_query().unwrap();
        prop_assert!(!required.is_written());
        prop_assert!(required.len() <= max_der_signature_size(2 * width));

        let der = der_signature_to_vec(&r, &s).unwrap();
        prop_assert_eq!(der.len(), required.len());
        let raw = read_der(&der, width).unwrap();
        prop_assert_eq!(raw.r(), &r[..]);
        prop_assert_eq!(raw.s(), &s[..]);
    }

    #[test]
    fn prop_short_buffers_write_nothing(r in half(32), s in half(32), cut in 0usize..8) {
        let required = write_der(&r, &s, None).size_query().unwrap().len();
        let mut out = vec![0xEEu8; required.saturating_sub(cut + 1)];
        let err = write_der(&r, &s, Some(&mut out[..])).unwrap_err();
        prop_assert_eq!(err.required_size(), Some(required));
        prop_assert!(out.iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn prop_signed_digests_verify(digest in half(32)) {
        let ec = bridge();
        let (private, public) = key_pair(&ec);
        let der = ec.sign_to_vec(&private, &digest).unwrap();
        prop_assert!(der.len() <= max_der_signature_size(64));
        prop_assert!(ec.verify(&public, &digest, &der).is_ok());

        let mut other = digest.clone();
        other[0] ^= 0x01;
        let err = ec.verify(&public, &other, &der).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::VerificationFailed);
    }

    #[test]
    fn prop_coordinates_survive_the_provider(x in half(32), y in half(32)) {
        let ec = bridge();
        let key = ec.public_key_from_coordinates(CurveType::Secp256r1, &x, &y).unwrap();
        let (x_out, y_out) = ec.public_key_coordinates(&key).unwrap();
        prop_assert_eq!(x_out, x);
        prop_assert_eq!(y_out, y);
    }
}
