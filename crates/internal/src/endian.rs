//! Endianness utility functions
//!
//! Wire encodings carry integers big-endian; the provider hands out raw
//! signature halves in its native little-endian order and keeps blob header
//! fields as native `u32`s. Every transform here is its own inverse.

/// Copy `src` into `dest` with the byte order reversed
///
/// Panics if the lengths differ; callers size `dest` from `src`.
pub fn reverse_copy(dest: &mut [u8], src: &[u8]) {
    assert_eq!(dest.len(), src.len(), "reverse_copy length mismatch");
    for (d, s) in dest.iter_mut().zip(src.iter().rev()) {
        *d = *s;
    }
}

/// Read a little-endian `u32` from the first four bytes of `bytes`
pub fn u32_from_le_bytes(bytes: &[u8]) -> Option<u32> {
    let word: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    Some(u32::from_le_bytes(word))
}

/// Convert a u32 from native byte order to little-endian bytes
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Copy a big-endian integer into a fixed-width big-endian field,
/// left-padding with zeros. Returns `false` if `src` does not fit.
pub fn pad_be_into(dest: &mut [u8], src: &[u8]) -> bool {
    if src.len() > dest.len() {
        return false;
    }
    let offset = dest.len() - src.len();
    dest[..offset].fill(0);
    dest[offset..].copy_from_slice(src);
    true
}
