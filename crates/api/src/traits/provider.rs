//! Contract between the bridge and the platform crypto provider
//!
//! The provider owns the actual curve arithmetic. The bridge only ever hands
//! it native coordinate blobs and fixed-width raw signatures, so any backend
//! that understands the blob layout in `ecshim_common::ec_common` can sit
//! behind it.

use crate::Result;
use ecshim_params::{AlgorithmId, BlobType};

/// Crypto provider capable of ECDSA over native key blobs
///
/// # Size queries
///
/// [`export_key`](Self::export_key) and [`sign_hash`](Self::sign_hash) follow
/// the two-pass convention: with `None`, or a buffer shorter than the
/// result, they return [`Error::BufferTooSmall`](crate::Error::BufferTooSmall)
/// carrying the required length and write nothing.
///
/// # Key lifetime
///
/// Destroying a key is dropping [`Self::Key`]. Implementations must release
/// (and, for private keys, wipe) the underlying material on drop.
pub trait EcProvider {
    /// Opaque imported key
    type Key;

    /// Short provider name used in diagnostics
    fn name(&self) -> &'static str;

    /// Import a native key blob of the given blob type
    fn import_key_pair(
        &self,
        algorithm: AlgorithmId,
        blob_type: BlobType,
        blob: &[u8],
    ) -> Result<Self::Key>;

    /// Export `key` as a native blob of the given blob type
    fn export_key(
        &self,
        key: &Self::Key,
        blob_type: BlobType,
        out: Option<&mut [u8]>,
    ) -> Result<usize>;

    /// Sign a pre-computed hash, producing the raw `r || s` form
    ///
    /// Each half is coordinate-width and in the provider's native
    /// little-endian order.
    fn sign_hash(&self, key: &Self::Key, hash: &[u8], out: Option<&mut [u8]>) -> Result<usize>;

    /// Verify a raw `r || s` signature over a pre-computed hash
    ///
    /// A signature that is well-formed but does not match is reported as
    /// [`Error::VerificationFailed`](crate::Error::VerificationFailed).
    fn verify_signature(&self, key: &Self::Key, hash: &[u8], raw_signature: &[u8]) -> Result<()>;
}

impl<P: EcProvider + ?Sized> EcProvider for &P {
    type Key = P::Key;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn import_key_pair(
        &self,
        algorithm: AlgorithmId,
        blob_type: BlobType,
        blob: &[u8],
    ) -> Result<Self::Key> {
        (**self).import_key_pair(algorithm, blob_type, blob)
    }

    fn export_key(
        &self,
        key: &Self::Key,
        blob_type: BlobType,
        out: Option<&mut [u8]>,
    ) -> Result<usize> {
        (**self).export_key(key, blob_type, out)
    }

    fn sign_hash(&self, key: &Self::Key, hash: &[u8], out: Option<&mut [u8]>) -> Result<usize> {
        (**self).sign_hash(key, hash, out)
    }

    fn verify_signature(&self, key: &Self::Key, hash: &[u8], raw_signature: &[u8]) -> Result<()> {
        (**self).verify_signature(key, hash, raw_signature)
    }
}
