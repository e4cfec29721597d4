//! Native key blobs for a named curve
//!
//! Resolves the provider magic for a curve and key kind, then lays the blob
//! out with `ecshim_common::ec_common`. A curve without a magic is
//! `Unsupported`.

use ecshim_api::{Error, Result};
use ecshim_common::ec_common::{build_private, build_public, NativeBlob};
use ecshim_common::SecretVec;
use ecshim_params::{magic, BlobType, CurveType, KeyKind};

fn magic_for(kind: KeyKind, curve: CurveType) -> Result<u32> {
    magic(kind, curve).ok_or_else(|| {
        tracing::debug!(?curve, ?kind, "no provider magic for curve");
        Error::Unsupported {
            feature: "EC curve without provider mapping",
        }
    })
}

/// `{magic, L, X, Y}` for big-endian coordinates on `curve`
pub fn public_blob(curve: CurveType, x: &[u8], y: &[u8]) -> Result<SecretVec> {
    let tag = magic_for(KeyKind::Public, curve)?;
    build_public(tag, x, y)
}

/// `{magic, L, 0, 0, D}` for a big-endian scalar on `curve`
pub fn private_blob(curve: CurveType, d: &[u8]) -> Result<SecretVec> {
    let tag = magic_for(KeyKind::Private, curve)?;
    build_private(tag, d)
}

/// Validate a blob the provider exported as public
///
/// The provider is trusted to produce well-formed blobs, so any defect here
/// is an internal error.
pub fn parse_exported_public<'a>(blob: &'a [u8], context: &'static str) -> Result<NativeBlob<'a>> {
    NativeBlob::parse_as(blob, BlobType::EccPublic)
        .map_err(|e| Error::unexpected(context, format!("provider exported a bad public blob: {e}")))
}
