//! Format descriptors for EC key material
//!
//! The provider distinguishes keys by a 32-bit magic number that encodes
//! curve, usage (ECDSA) and kind (public/private) at once. The lookup below
//! is closed over `KeyKind x CurveType` and resolved at compile time; a
//! `None` answer means the curve is not wired to the provider.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest coordinate or signature-half length accepted anywhere (C `INT_MAX`).
pub const INT_MAX: usize = i32::MAX as usize;

/// Size of the `{ magic: u32, key_length: u32 }` header that starts every
/// native ECC key blob.
pub const ECCKEY_BLOB_HEADER_SIZE: usize = 8;

/// Magic for an ECDSA P-256 public blob ("ECS1").
pub const ECDSA_PUBLIC_P256_MAGIC: u32 = 0x3153_4345;

/// Magic for an ECDSA P-256 private blob ("ECS2").
pub const ECDSA_PRIVATE_P256_MAGIC: u32 = 0x3253_4345;

/// The only curve with a provider mapping.
pub const DEFAULT_CURVE: CurveType = CurveType::Secp256r1;

/// Named curves a caller may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveType {
    /// NIST P-256 / prime256v1
    Secp256r1,
    /// NIST P-384
    Secp384r1,
    /// NIST P-521
    Secp521r1,
}

/// Public or private half of a key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyKind {
    Public,
    Private,
}

/// Provider algorithm selector used at import time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlgorithmId {
    /// ECDSA over P-256
    EcdsaP256,
}

/// Provider blob-type selector used for import and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlobType {
    /// `{ magic, cbKey, X, Y }`
    EccPublic,
    /// `{ magic, cbKey, X, Y, d }`
    EccPrivate,
}

/// Wire encoding a key is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyEncoding {
    /// SEC1 `ECPrivateKey` (optionally wrapped in PKCS#8)
    EcPrivateKeyInfo,
    /// X.509 `SubjectPublicKeyInfo` with `id-ecPublicKey`
    EcPublicKeyInfo,
}

/// Static description of how one key kind travels to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyFormat {
    pub encoding: KeyEncoding,
    pub algorithm: AlgorithmId,
    pub blob_type: BlobType,
}

pub const PRIVATE_EC_KEY_FORMAT: KeyFormat = KeyFormat {
    encoding: KeyEncoding::EcPrivateKeyInfo,
    algorithm: AlgorithmId::EcdsaP256,
    blob_type: BlobType::EccPrivate,
};

pub const PUBLIC_EC_KEY_FORMAT: KeyFormat = KeyFormat {
    encoding: KeyEncoding::EcPublicKeyInfo,
    algorithm: AlgorithmId::EcdsaP256,
    blob_type: BlobType::EccPublic,
};

impl KeyKind {
    /// Format descriptor for this kind
    pub const fn format(self) -> KeyFormat {
        match self {
            KeyKind::Public => PUBLIC_EC_KEY_FORMAT,
            KeyKind::Private => PRIVATE_EC_KEY_FORMAT,
        }
    }
}

impl BlobType {
    /// Number of `cbKey`-sized fields after the header
    pub const fn component_count(self) -> usize {
        match self {
            BlobType::EccPublic => 2,
            BlobType::EccPrivate => 3,
        }
    }

    /// Key kind carried by blobs of this type
    pub const fn kind(self) -> KeyKind {
        match self {
            BlobType::EccPublic => KeyKind::Public,
            BlobType::EccPrivate => KeyKind::Private,
        }
    }
}

/// Provider magic for `kind` on `curve`, or `None` when the curve is not wired.
pub const fn magic(kind: KeyKind, curve: CurveType) -> Option<u32> {
    match (kind, curve) {
        (KeyKind::Public, CurveType::Secp256r1) => Some(ECDSA_PUBLIC_P256_MAGIC),
        (KeyKind::Private, CurveType::Secp256r1) => Some(ECDSA_PRIVATE_P256_MAGIC),
        _ => None,
    }
}

/// Reverse lookup of [`magic`]
pub const fn curve_for_magic(value: u32) -> Option<(KeyKind, CurveType)> {
    match value {
        ECDSA_PUBLIC_P256_MAGIC => Some((KeyKind::Public, CurveType::Secp256r1)),
        ECDSA_PRIVATE_P256_MAGIC => Some((KeyKind::Private, CurveType::Secp256r1)),
        _ => None,
    }
}

/// Byte length of one coordinate (field element) on `curve`
pub const fn coordinate_width(curve: CurveType) -> usize {
    match curve {
        CurveType::Secp256r1 => 32,
        CurveType::Secp384r1 => 48,
        CurveType::Secp521r1 => 66,
    }
}

/// Algorithm selector the provider expects for `curve`
pub const fn algorithm_for(curve: CurveType) -> Option<AlgorithmId> {
    match curve {
        CurveType::Secp256r1 => Some(AlgorithmId::EcdsaP256),
        _ => None,
    }
}
