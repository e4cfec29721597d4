//! Native ECC key blob layout
//!
//! ```text
//! +-------------+---------------+--------+--------+----------+
//! | magic (u32) | cbKey (u32)   | X[L]   | Y[L]   | (D[L])   |
//! +-------------+---------------+--------+--------+----------+
//! ```
//!
//! Header words are little-endian, like the provider's native `ULONG`s.
//! Coordinates and the private scalar are big-endian and exactly `cbKey`
//! bytes wide. The bridge builds these blobs and the provider parses them,
//! so both sides share this module.

use ecshim_api::{Error, Result};
use ecshim_internal::endian::{u32_from_le_bytes, u32_to_le_bytes};
use ecshim_params::{
    curve_for_magic, BlobType, CurveType, KeyKind, ECCKEY_BLOB_HEADER_SIZE, INT_MAX,
};

use crate::security::SecretVec;

/// Total blob size for `blob_type` at coordinate width `width`
///
/// `None` if the size overflows or the width is outside `1..=INT_MAX`.
pub fn blob_len(blob_type: BlobType, width: usize) -> Option<usize> {
    if width == 0 || width > INT_MAX {
        return None;
    }
    width
        .checked_mul(blob_type.component_count())?
        .checked_add(ECCKEY_BLOB_HEADER_SIZE)
}

fn write_header(blob: &mut [u8], magic: u32, width: usize) -> Result<()> {
    let key_length = u32::try_from(width)
        .map_err(|_| Error::invalid_parameter("native blob", "coordinate width exceeds u32"))?;
    blob[..4].copy_from_slice(&u32_to_le_bytes(magic));
    blob[4..8].copy_from_slice(&u32_to_le_bytes(key_length));
    Ok(())
}

/// Build `{magic, L, X, Y}` from big-endian coordinates
pub fn build_public(magic: u32, x: &[u8], y: &[u8]) -> Result<SecretVec> {
    if x.len() != y.len() {
        return Err(Error::invalid_parameter(
            "native blob",
            "coordinate lengths differ",
        ));
    }
    let width = x.len();
    let len = blob_len(BlobType::EccPublic, width)
        .ok_or_else(|| Error::invalid_parameter("native blob", "invalid coordinate width"))?;

    let mut blob = SecretVec::try_zeroed(len)?;
    write_header(&mut blob, magic, width)?;
    let body = &mut blob[ECCKEY_BLOB_HEADER_SIZE..];
    body[..width].copy_from_slice(x);
    body[width..].copy_from_slice(y);
    Ok(blob)
}

/// Build `{magic, L, 0^L, 0^L, D}` from a big-endian private scalar
///
/// The coordinates are left zero; the provider recomputes the public point.
pub fn build_private(magic: u32, d: &[u8]) -> Result<SecretVec> {
    let width = d.len();
    let len = blob_len(BlobType::EccPrivate, width)
        .ok_or_else(|| Error::invalid_parameter("native blob", "invalid scalar width"))?;

    let mut blob = SecretVec::try_zeroed(len)?;
    write_header(&mut blob, magic, width)?;
    blob[ECCKEY_BLOB_HEADER_SIZE + 2 * width..].copy_from_slice(d);
    Ok(blob)
}

/// Fill a caller-sized public blob in place
///
/// `out` must be exactly `blob_len(EccPublic, x.len())` bytes.
pub fn encode_public_into(out: &mut [u8], magic: u32, x: &[u8], y: &[u8]) -> Result<()> {
    let width = x.len();
    if y.len() != width || blob_len(BlobType::EccPublic, width) != Some(out.len()) {
        return Err(Error::unexpected(
            "native blob",
            "public blob buffer does not match coordinate width",
        ));
    }
    write_header(out, magic, width)?;
    let body = &mut out[ECCKEY_BLOB_HEADER_SIZE..];
    body[..width].copy_from_slice(x);
    body[width..].copy_from_slice(y);
    Ok(())
}

/// Borrowed, validated view of a native blob
#[derive(Clone, Copy)]
pub struct NativeBlob<'a> {
    kind: KeyKind,
    curve: CurveType,
    width: usize,
    body: &'a [u8],
}

impl<'a> NativeBlob<'a> {
    /// Validate header and length
    ///
    /// The magic must be a known tag, and the length must be exactly
    /// `8 + n * cbKey` with `n` set by the key kind the magic names.
    pub fn parse(blob: &'a [u8]) -> Result<Self> {
        let magic = u32_from_le_bytes(blob)
            .ok_or_else(|| Error::invalid_parameter("native blob", "truncated header"))?;
        let key_length = blob
            .get(4..)
            .and_then(u32_from_le_bytes)
            .ok_or_else(|| Error::invalid_parameter("native blob", "truncated header"))?;
        let (kind, curve) = curve_for_magic(magic).ok_or_else(|| {
            Error::invalid_parameter("native blob", format!("unknown magic {magic:#010x}"))
        })?;

        let width = key_length as usize;
        let blob_type = match kind {
            KeyKind::Public => BlobType::EccPublic,
            KeyKind::Private => BlobType::EccPrivate,
        };
        if blob_len(blob_type, width) != Some(blob.len()) {
            return Err(Error::invalid_parameter(
                "native blob",
                "length does not match header",
            ));
        }

        Ok(Self {
            kind,
            curve,
            width,
            body: &blob[ECCKEY_BLOB_HEADER_SIZE..],
        })
    }

    /// Like [`parse`](Self::parse), additionally requiring `blob_type`
    pub fn parse_as(blob: &'a [u8], blob_type: BlobType) -> Result<Self> {
        let view = Self::parse(blob)?;
        if view.kind != blob_type.kind() {
            return Err(Error::invalid_parameter(
                "native blob",
                "blob kind does not match requested blob type",
            ));
        }
        Ok(view)
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn curve(&self) -> CurveType {
        self.curve
    }

    /// Coordinate width `cbKey`
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn x(&self) -> &'a [u8] {
        &self.body[..self.width]
    }

    pub fn y(&self) -> &'a [u8] {
        &self.body[self.width..2 * self.width]
    }

    /// Private scalar, present only on private blobs
    pub fn d(&self) -> Option<&'a [u8]> {
        match self.kind {
            KeyKind::Private => Some(&self.body[2 * self.width..]),
            KeyKind::Public => None,
        }
    }
}

impl core::fmt::Debug for NativeBlob<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NativeBlob")
            .field("kind", &self.kind)
            .field("curve", &self.curve)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
