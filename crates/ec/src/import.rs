//! Key import from DER and public key export
//!
//! Private keys arrive as SEC1 `ECPrivateKey`, optionally wrapped in a
//! PKCS#8 `PrivateKeyInfo` (v1, or v2 with its `[1]` public key). Public
//! keys arrive as `SubjectPublicKeyInfo` with `id-ecPublicKey`, a named curve
//! and an uncompressed point. The ASN.1 structures are decoded and encoded
//! with `sec1`, `pkcs8` and `spki`; this module maps them onto the bridge's
//! curves and errors.

use core::fmt::Display;

use der::asn1::{AnyRef, BitStringRef, ObjectIdentifier};
use der::{Decode, Encode};
use ecshim_api::{EcProvider, Error, Result};
use ecshim_params::oid::{self, curve_for_oid, ID_EC_PUBLIC_KEY};
use ecshim_params::{
    coordinate_width, CurveType, KeyKind, DEFAULT_CURVE, PRIVATE_EC_KEY_FORMAT, PUBLIC_EC_KEY_FORMAT,
};
use pkcs8::PrivateKeyInfo;
use sec1::EcPrivateKey;
use spki::{AlgorithmIdentifierRef, SubjectPublicKeyInfoRef};

use crate::blob::{parse_exported_public, private_blob, public_blob};
use crate::bridge::{Ec, KeyHandle};
use crate::handle::EcKey;

const UNCOMPRESSED_POINT: u8 = 0x04;

/// Fields of a decoded private key that the bridge uses
pub(crate) struct PrivateKeyDer<'a> {
    pub curve: CurveType,
    pub scalar: &'a [u8],
}

impl core::fmt::Debug for PrivateKeyDer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKeyDer")
            .field("curve", &self.curve)
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}

/// Fields of a decoded `SubjectPublicKeyInfo`
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PublicKeyDer<'a> {
    pub curve: CurveType,
    pub x: &'a [u8],
    pub y: &'a [u8],
}

fn malformed(err: impl Display) -> Error {
    Error::decode("der", err.to_string())
}

fn check_der_input(der: &[u8], context: &'static str) -> Result<()> {
    if der.is_empty() {
        return Err(Error::invalid_parameter(context, "empty DER input"));
    }
    if der.len() as u64 > u64::from(u32::MAX) {
        return Err(Error::invalid_parameter(context, "DER input exceeds 32-bit length"));
    }
    Ok(())
}

fn named_curve(curve_oid: ObjectIdentifier) -> Result<CurveType> {
    curve_for_oid(curve_oid.as_bytes()).ok_or_else(|| {
        tracing::debug!(oid = %curve_oid, "unrecognised named curve");
        Error::Unsupported {
            feature: "EC named curve",
        }
    })
}

fn check_ec_algorithm(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<()> {
    if algorithm.oid.as_bytes() != ID_EC_PUBLIC_KEY {
        return Err(Error::decode("der", "key algorithm is not id-ecPublicKey"));
    }
    Ok(())
}

/// Decode a SEC1 or PKCS#8 EC private key
pub(crate) fn parse_private_key(der: &[u8]) -> Result<PrivateKeyDer<'_>> {
    let (curve_oid, scalar) = match PrivateKeyInfo::from_der(der) {
        Ok(info) => {
            check_ec_algorithm(&info.algorithm)?;
            let outer = info
                .algorithm
                .parameters
                .map(ObjectIdentifier::try_from)
                .transpose()
                .map_err(malformed)?;
            let key = EcPrivateKey::from_der(info.private_key).map_err(malformed)?;
            let inner = key.parameters.and_then(|params| params.named_curve());
            let curve_oid = match (outer, inner) {
                (Some(a), Some(b)) if a != b => {
                    return Err(Error::decode("der", "conflicting curve parameters"))
                }
                (a, b) => a.or(b),
            };
            (curve_oid, key.private_key)
        }
        // a bare ECPrivateKey fails PrivateKeyInfo at its second field
        Err(_) => {
            let key = EcPrivateKey::from_der(der).map_err(malformed)?;
            (key.parameters.and_then(|params| params.named_curve()), key.private_key)
        }
    };

    if scalar.is_empty() {
        return Err(Error::decode("der", "empty private key"));
    }
    let curve = match curve_oid {
        Some(curve_oid) => named_curve(curve_oid)?,
        None => DEFAULT_CURVE,
    };
    Ok(PrivateKeyDer { curve, scalar })
}

/// Decode an EC `SubjectPublicKeyInfo`
pub(crate) fn parse_public_key(der: &[u8]) -> Result<PublicKeyDer<'_>> {
    let spki = SubjectPublicKeyInfoRef::from_der(der).map_err(malformed)?;
    check_ec_algorithm(&spki.algorithm)?;
    let curve = named_curve(spki.algorithm.parameters_oid().map_err(malformed)?)?;

    let point = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::decode("der", "bit string with unused bits"))?;
    let coordinates = match point {
        [UNCOMPRESSED_POINT, rest @ ..] => rest,
        _ => return Err(Error::decode("der", "public point is not uncompressed")),
    };
    if Some(coordinates.len()) != coordinate_width(curve).checked_mul(2) {
        return Err(Error::decode("der", "public point length does not match the curve"));
    }
    let (x, y) = coordinates.split_at(coordinates.len() / 2);
    Ok(PublicKeyDer { curve, x, y })
}

/// `04 || X || Y`
fn uncompressed_point(x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
    let mut point = Vec::new();
    point.try_reserve_exact(1 + x.len() + y.len())?;
    point.push(UNCOMPRESSED_POINT);
    point.extend_from_slice(x);
    point.extend_from_slice(y);
    Ok(point)
}

impl<P: EcProvider> Ec<P> {
    /// Import a DER private key
    ///
    /// The native blob carries the scalar only; the provider recomputes the
    /// public point. The blob is wiped on every path out of this call.
    pub fn private_key_from_der(&self, der: &[u8]) -> Result<KeyHandle<P>> {
        const CONTEXT: &str = "private_key_from_der";
        check_der_input(der, CONTEXT)?;

        let parsed = parse_private_key(der).map_err(|e| e.with_context(CONTEXT))?;
        let blob = private_blob(parsed.curve, parsed.scalar)?;
        let key = self
            .provider()
            .import_key_pair(
                PRIVATE_EC_KEY_FORMAT.algorithm,
                PRIVATE_EC_KEY_FORMAT.blob_type,
                &blob,
            )
            .map_err(|e| {
                tracing::debug!(
                    provider = self.provider().name(),
                    context = CONTEXT,
                    "private key import failed"
                );
                e.with_context(CONTEXT)
            })?;
        Ok(EcKey::private(key, parsed.scalar.len()))
    }

    /// Import a DER `SubjectPublicKeyInfo`
    pub fn public_key_from_der(&self, der: &[u8]) -> Result<KeyHandle<P>> {
        const CONTEXT: &str = "public_key_from_der";
        check_der_input(der, CONTEXT)?;

        let parsed = parse_public_key(der).map_err(|e| e.with_context(CONTEXT))?;
        let blob = public_blob(parsed.curve, parsed.x, parsed.y)?;
        self.import_public_blob(&blob, parsed.x.len(), CONTEXT)
    }

    pub(crate) fn import_public_blob(
        &self,
        blob: &[u8],
        width: usize,
        context: &'static str,
    ) -> Result<KeyHandle<P>> {
        let key = self
            .provider()
            .import_key_pair(
                PUBLIC_EC_KEY_FORMAT.algorithm,
                PUBLIC_EC_KEY_FORMAT.blob_type,
                blob,
            )
            .map_err(|e| {
                tracing::debug!(
                    provider = self.provider().name(),
                    context,
                    "public key import failed"
                );
                e.with_context(context)
            })?;
        Ok(EcKey::public(key, width))
    }

    /// Encode a public key as DER `SubjectPublicKeyInfo`
    ///
    /// Follows the size-query convention: with `None`, or a buffer that is
    /// too short, nothing is written and `BufferTooSmall` carries the size.
    pub fn public_key_to_der(&self, key: &KeyHandle<P>, out: Option<&mut [u8]>) -> Result<usize> {
        const CONTEXT: &str = "public_key_to_der";
        let native = key.native(KeyKind::Public, CONTEXT)?;

        let blob = self.export_public_blob(native.provider_key(), CONTEXT)?;
        let view = parse_exported_public(&blob, CONTEXT)?;
        let encoding = |e: der::Error| Error::unexpected(CONTEXT, e.to_string());

        let point = uncompressed_point(view.x(), view.y())?;
        let algorithm = ObjectIdentifier::from_bytes(ID_EC_PUBLIC_KEY)
            .map_err(|e| Error::unexpected(CONTEXT, e.to_string()))?;
        let curve = ObjectIdentifier::from_bytes(oid::for_curve(view.curve()))
            .map_err(|e| Error::unexpected(CONTEXT, e.to_string()))?;
        let spki = SubjectPublicKeyInfoRef {
            algorithm: AlgorithmIdentifierRef {
                oid: algorithm,
                parameters: Some(AnyRef::from(&curve)),
            },
            subject_public_key: BitStringRef::new(0, &point).map_err(encoding)?,
        };
        let total = spki.encoded_len().and_then(usize::try_from).map_err(encoding)?;

        let out = match out {
            Some(buf) if buf.len() >= total => buf,
            _ => {
                tracing::trace!(required = total, "public key DER size query");
                return Err(Error::buffer_too_small(CONTEXT, total));
            }
        };
        let written = spki.encode_to_slice(&mut out[..total]).map_err(encoding)?;
        Ok(written.len())
    }

    /// Encode a public key as DER into a new vector
    pub fn public_key_to_der_vec(&self, key: &KeyHandle<P>) -> Result<Vec<u8>> {
        let required = match self.public_key_to_der(key, None) {
            Err(Error::BufferTooSmall { required, .. }) => required,
            Err(e) => return Err(e),
            Ok(_) => return Err(Error::unexpected("public_key_to_der_vec", "size query wrote output")),
        };
        let mut out = Vec::new();
        out.try_reserve_exact(required)?;
        out.resize(required, 0);
        let written = self.public_key_to_der(key, Some(&mut out[..]))?;
        out.truncate(written);
        Ok(out)
    }

    /// Big-endian `(X, Y)` of a public key
    pub fn public_key_coordinates(&self, key: &KeyHandle<P>) -> Result<(Vec<u8>, Vec<u8>)> {
        const CONTEXT: &str = "public_key_coordinates";
        let native = key.native(KeyKind::Public, CONTEXT)?;
        let blob = self.export_public_blob(native.provider_key(), CONTEXT)?;
        let view = parse_exported_public(&blob, CONTEXT)?;

        let mut x = Vec::new();
        x.try_reserve_exact(view.width())?;
        x.extend_from_slice(view.x());
        let mut y = Vec::new();
        y.try_reserve_exact(view.width())?;
        y.extend_from_slice(view.y());
        Ok((x, y))
    }

    /// Public half of a private key as a new public handle
    pub fn public_key_from_private(&self, key: &KeyHandle<P>) -> Result<KeyHandle<P>> {
        const CONTEXT: &str = "public_key_from_private";
        let native = key.native(KeyKind::Private, CONTEXT)?;
        let blob = self.export_public_blob(native.provider_key(), CONTEXT)?;
        let width = parse_exported_public(&blob, CONTEXT)?.width();
        self.import_public_blob(&blob, width, CONTEXT)
    }
}
