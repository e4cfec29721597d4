//! ECDSA signature codec
//!
//! Converts between the provider's raw `r || s` form and the DER
//! `ECDSA-Sig-Value`:
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }
//! ```
//!
//! Raw halves are in the provider's native little-endian order; DER integers
//! are big-endian, minimal, and carry a `0x00` sign guard when the top bit of
//! the first magnitude byte is set.

use ecshim_api::{Error, Result};
use ecshim_internal::endian::{pad_be_into, reverse_copy};
use ecshim_params::INT_MAX;

use crate::asn1::{element_len, integer_content_len, DerReader, DerWriter, TAG_SEQUENCE};

/// Worst-case DER bytes on top of the raw signature length
///
/// One tag and up to two length bytes for the SEQUENCE, then for each
/// INTEGER one tag, one length byte and one sign guard.
pub const MAX_ENCODED_OVERHEAD: usize = 9;

/// Upper bound on the DER encoding of a raw signature of `raw_len` bytes
///
/// Holds for halves of up to 126 bytes, which covers every NIST curve.
pub const fn max_der_signature_size(raw_len: usize) -> usize {
    MAX_ENCODED_OVERHEAD + raw_len
}

fn check_half(half: &[u8], name: &'static str) -> Result<()> {
    if half.is_empty() {
        return Err(Error::invalid_parameter("write_der", format!("{name} is empty")));
    }
    if half.len() > INT_MAX {
        return Err(Error::invalid_parameter("write_der", format!("{name} is too long")));
    }
    Ok(())
}

fn to_big_endian(half: &[u8]) -> Result<Vec<u8>> {
    let mut be = Vec::new();
    be.try_reserve_exact(half.len())?;
    be.resize(half.len(), 0);
    reverse_copy(&mut be, half);
    Ok(be)
}

/// Encode little-endian halves `r` and `s` as a DER `ECDSA-Sig-Value`
///
/// `r` and `s` must be in the provider's native little-endian order, the
/// layout [`crate::Ec::sign`] receives from
/// [`EcProvider::sign_hash`](ecshim_api::EcProvider::sign_hash). Callers
/// holding big-endian halves must reverse each one first; passing them
/// unchanged encodes different integers without any error.
///
/// With `None`, or a buffer shorter than the encoding, nothing is written
/// and [`Error::BufferTooSmall`] reports the exact size needed. Otherwise
/// returns the number of bytes written.
pub fn write_der(r: &[u8], s: &[u8], out: Option<&mut [u8]>) -> Result<usize> {
    check_half(r, "r")?;
    check_half(s, "s")?;
    if let Some(buf) = out.as_deref() {
        if buf.len() as u64 > u64::from(u32::MAX) {
            return Err(Error::invalid_parameter(
                "write_der",
                "output buffer exceeds 32-bit length",
            ));
        }
    }

    let r_be = to_big_endian(r)?;
    let s_be = to_big_endian(s)?;

    let overflow = || Error::invalid_parameter("write_der", "encoding too large");
    let r_len = element_len(integer_content_len(&r_be)).ok_or_else(overflow)?;
    let s_len = element_len(integer_content_len(&s_be)).ok_or_else(overflow)?;
    let body_len = r_len.checked_add(s_len).ok_or_else(overflow)?;
    let total = element_len(body_len).ok_or_else(overflow)?;

    let out = match out {
        Some(buf) if buf.len() >= total => buf,
        _ => {
            tracing::trace!(required = total, "write_der size query");
            return Err(Error::buffer_too_small("write_der", total));
        }
    };

    let mut writer = DerWriter::new(&mut out[..total]);
    writer.write_header(TAG_SEQUENCE, body_len)?;
    writer.write_unsigned_integer(&r_be)?;
    writer.write_unsigned_integer(&s_be)?;
    if writer.position() != total {
        return Err(Error::unexpected("write_der", "encoded length mismatch"));
    }
    Ok(total)
}

/// Encode into a freshly allocated vector
pub fn der_signature_to_vec(r: &[u8], s: &[u8]) -> Result<Vec<u8>> {
    let capacity = max_der_signature_size(r.len().saturating_add(s.len()));
    let mut out = Vec::new();
    out.try_reserve_exact(capacity)?;
    out.resize(capacity, 0);

    let written = match write_der(r, s, Some(&mut out[..])) {
        Ok(written) => written,
        Err(Error::BufferTooSmall { required, .. }) => {
            // Only reachable for halves wider than the bound covers
            out.try_reserve_exact(required.saturating_sub(out.len()))?;
            out.resize(required, 0);
            write_der(r, s, Some(&mut out[..]))?
        }
        Err(e) => return Err(e),
    };
    out.truncate(written);
    Ok(out)
}

/// Raw `r || s` signature with halves in provider-native order
#[derive(Clone, PartialEq, Eq)]
pub struct RawSignature {
    bytes: Vec<u8>,
    width: usize,
}

impl RawSignature {
    /// Width of one half
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn r(&self) -> &[u8] {
        &self.bytes[..self.width]
    }

    pub fn s(&self) -> &[u8] {
        &self.bytes[self.width..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for RawSignature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for RawSignature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawSignature")
            .field("width", &self.width)
            .field("bytes", &format_args!("{:02x?}", self.bytes))
            .finish()
    }
}

/// Decode a DER `ECDSA-Sig-Value` into raw halves of `width` bytes each
pub fn read_der(der: &[u8], width: usize) -> Result<RawSignature> {
    if der.is_empty() || der.len() as u64 > u64::from(u32::MAX) {
        return Err(Error::invalid_parameter(
            "read_der",
            "signature must be 1..=u32::MAX bytes",
        ));
    }
    if width == 0 || width > INT_MAX {
        return Err(Error::invalid_parameter("read_der", "invalid half width"));
    }

    let mut outer = DerReader::new(der);
    let mut seq = outer.read_sequence().map_err(|e| e.with_context("read_der"))?;
    outer.finish().map_err(|e| e.with_context("read_der"))?;
    let r = seq
        .read_unsigned_integer()
        .map_err(|e| e.with_context("read_der"))?;
    let s = seq
        .read_unsigned_integer()
        .map_err(|e| e.with_context("read_der"))?;
    seq.finish().map_err(|e| e.with_context("read_der"))?;

    let raw_len = width
        .checked_mul(2)
        .ok_or_else(|| Error::invalid_parameter("read_der", "invalid half width"))?;
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(raw_len)?;
    bytes.resize(raw_len, 0);

    let mut padded = Vec::new();
    padded.try_reserve_exact(width)?;
    padded.resize(width, 0);
    for (value, half) in [r, s].into_iter().zip(bytes.chunks_exact_mut(width)) {
        if !pad_be_into(&mut padded, value) {
            return Err(Error::decode("read_der", "integer wider than coordinate"));
        }
        reverse_copy(half, &padded);
    }

    Ok(RawSignature { bytes, width })
}
