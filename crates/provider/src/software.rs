//! Software implementation of [`EcProvider`] over P-256

use ecshim_api::{EcProvider, Result};
use ecshim_common::ec_common::{blob_len, encode_public_into, NativeBlob};
use ecshim_internal::endian::reverse_copy;
use ecshim_params::{algorithm_for, magic, AlgorithmId, BlobType, CurveType, KeyKind};
use p256::ecdsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use p256::ecdsa::Signature;
use p256::FieldBytes;
use rand::rngs::OsRng;

use crate::error::{ProviderError, ProviderResult};
use crate::key::{SoftwareKey, P256_WIDTH};

/// Length of a raw `r || s` signature
pub const RAW_SIGNATURE_LEN: usize = 2 * P256_WIDTH;

/// Crypto provider backed by the `p256` crate
///
/// Signing draws nonces from the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareProvider;

impl SoftwareProvider {
    pub fn new() -> Self {
        Self
    }

    fn import(&self, algorithm: AlgorithmId, blob_type: BlobType, blob: &[u8]) -> ProviderResult<SoftwareKey> {
        let view = NativeBlob::parse_as(blob, blob_type)
            .map_err(|_| ProviderError::InvalidParameter("malformed key blob"))?;
        if view.curve() != CurveType::Secp256r1 || algorithm_for(view.curve()) != Some(algorithm) {
            return Err(ProviderError::NotSupported("curve"));
        }
        match view.d() {
            Some(d) => SoftwareKey::private(d),
            None => SoftwareKey::public(view.x(), view.y()),
        }
    }

    fn export(&self, key: &SoftwareKey, blob_type: BlobType, out: Option<&mut [u8]>) -> ProviderResult<usize> {
        if blob_type == BlobType::EccPrivate {
            return if key.is_private() {
                Err(ProviderError::NotSupported("private key export"))
            } else {
                Err(ProviderError::InvalidParameter("public key has no private blob"))
            };
        }

        let required = blob_len(BlobType::EccPublic, P256_WIDTH)
            .ok_or(ProviderError::InvalidParameter("blob length"))?;
        let out = match out {
            Some(out) if out.len() >= required => out,
            _ => return Err(ProviderError::BufferTooSmall { required }),
        };

        let (x, y) = key.coordinates()?;
        let tag = magic(KeyKind::Public, CurveType::Secp256r1)
            .ok_or(ProviderError::NotSupported("curve"))?;
        encode_public_into(&mut out[..required], tag, &x, &y)
            .map_err(|_| ProviderError::InvalidParameter("blob layout"))?;
        Ok(required)
    }

    fn sign(&self, key: &SoftwareKey, hash: &[u8], out: Option<&mut [u8]>) -> ProviderResult<usize> {
        let signing_key = key.signing_key()?;
        if hash.is_empty() {
            return Err(ProviderError::InvalidParameter("empty hash"));
        }
        let out = match out {
            Some(out) if out.len() >= RAW_SIGNATURE_LEN => out,
            _ => {
                return Err(ProviderError::BufferTooSmall {
                    required: RAW_SIGNATURE_LEN,
                })
            }
        };

        let signature: Signature = signing_key
            .sign_prehash_with_rng(&mut OsRng, hash)
            .map_err(|_| ProviderError::InvalidParameter("hash length"))?;
        let (r, s) = signature.split_bytes();

        // Halves go out in native (little-endian) order
        reverse_copy(&mut out[..P256_WIDTH], &r);
        reverse_copy(&mut out[P256_WIDTH..RAW_SIGNATURE_LEN], &s);
        Ok(RAW_SIGNATURE_LEN)
    }

    fn verify(&self, key: &SoftwareKey, hash: &[u8], raw_signature: &[u8]) -> ProviderResult<()> {
        if hash.is_empty() {
            return Err(ProviderError::InvalidParameter("empty hash"));
        }
        if raw_signature.len() != RAW_SIGNATURE_LEN {
            return Err(ProviderError::InvalidParameter("raw signature length"));
        }
        let verifying_key = key.verifying_key()?;

        let mut r = FieldBytes::default();
        let mut s = FieldBytes::default();
        reverse_copy(&mut r, &raw_signature[..P256_WIDTH]);
        reverse_copy(&mut s, &raw_signature[P256_WIDTH..]);

        // Zero or out-of-range scalars can never verify
        let signature =
            Signature::from_scalars(r, s).map_err(|_| ProviderError::InvalidSignature)?;
        verifying_key
            .verify_prehash(hash, &signature)
            .map_err(|_| ProviderError::InvalidSignature)
    }
}

impl EcProvider for SoftwareProvider {
    type Key = SoftwareKey;

    fn name(&self) -> &'static str {
        "software-p256"
    }

    fn import_key_pair(
        &self,
        algorithm: AlgorithmId,
        blob_type: BlobType,
        blob: &[u8],
    ) -> Result<Self::Key> {
        self.import(algorithm, blob_type, blob)
            .map_err(|e| e.into_api("import_key_pair"))
    }

    fn export_key(
        &self,
        key: &Self::Key,
        blob_type: BlobType,
        out: Option<&mut [u8]>,
    ) -> Result<usize> {
        self.export(key, blob_type, out)
            .map_err(|e| e.into_api("export_key"))
    }

    fn sign_hash(&self, key: &Self::Key, hash: &[u8], out: Option<&mut [u8]>) -> Result<usize> {
        self.sign(key, hash, out).map_err(|e| e.into_api("sign_hash"))
    }

    fn verify_signature(&self, key: &Self::Key, hash: &[u8], raw_signature: &[u8]) -> Result<()> {
        self.verify(key, hash, raw_signature)
            .map_err(|e| e.into_api("verify_signature"))
    }
}
