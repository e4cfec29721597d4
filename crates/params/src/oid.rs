//! DER content octets of the object identifiers the key structures use

use crate::ecc::CurveType;

/// id-ecPublicKey (1.2.840.10045.2.1)
pub const ID_EC_PUBLIC_KEY: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];

/// prime256v1 / secp256r1 (1.2.840.10045.3.1.7)
pub const PRIME256V1: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07];

/// secp384r1 (1.3.132.0.34)
pub const SECP384R1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x22];

/// secp521r1 (1.3.132.0.35)
pub const SECP521R1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x23];

/// Named-curve OID for `curve`
pub const fn for_curve(curve: CurveType) -> &'static [u8] {
    match curve {
        CurveType::Secp256r1 => PRIME256V1,
        CurveType::Secp384r1 => SECP384R1,
        CurveType::Secp521r1 => SECP521R1,
    }
}

/// Curve named by the OID content octets, if it is one we know of
pub fn curve_for_oid(oid: &[u8]) -> Option<CurveType> {
    [CurveType::Secp256r1, CurveType::Secp384r1, CurveType::Secp521r1]
        .into_iter()
        .find(|&curve| for_curve(curve) == oid)
}
