//! Minimal DER reader and writer for `ECDSA-Sig-Value`
//!
//! Only SEQUENCE and INTEGER with definite lengths of at most four bytes.
//! Everything is checked strictly, so any encoding accepted here is
//! canonical DER. Key structures go through the `der` crate family instead.

use ecshim_api::{Error, Result};

pub const TAG_INTEGER: u8 = 0x02;
pub const TAG_SEQUENCE: u8 = 0x30;

/// Longest length field accepted, excluding the initial byte
const MAX_LENGTH_BYTES: usize = 4;

fn malformed(message: &'static str) -> Error {
    Error::decode("der", message)
}

/// Cursor over a DER-encoded byte string
#[derive(Debug, Clone)]
pub struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or_else(|| malformed("unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = self.read_byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        if first == 0x80 {
            return Err(malformed("indefinite length"));
        }

        let count = (first & 0x7F) as usize;
        if count > MAX_LENGTH_BYTES {
            return Err(malformed("length field too long"));
        }
        let mut len = 0usize;
        for i in 0..count {
            let byte = self.read_byte()?;
            if i == 0 && byte == 0 {
                return Err(malformed("non-minimal length"));
            }
            len = (len << 8) | byte as usize;
        }
        if len < 0x80 {
            return Err(malformed("non-minimal length"));
        }
        Ok(len)
    }

    /// Read one tag-length-value triple
    pub fn read_tlv(&mut self) -> Result<(u8, &'a [u8])> {
        let tag = self.read_byte()?;
        let len = self.read_length()?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.input.len())
            .ok_or_else(|| malformed("truncated content"))?;
        let content = &self.input[self.pos..end];
        self.pos = end;
        Ok((tag, content))
    }

    /// Read one element that must carry `tag`
    pub fn read_expected(&mut self, tag: u8) -> Result<&'a [u8]> {
        let (found, content) = self.read_tlv()?;
        if found != tag {
            return Err(malformed("unexpected tag"));
        }
        Ok(content)
    }

    /// Enter a SEQUENCE, returning a reader over its content
    pub fn read_sequence(&mut self) -> Result<DerReader<'a>> {
        self.read_expected(TAG_SEQUENCE).map(DerReader::new)
    }

    /// Read a non-negative INTEGER as big-endian magnitude
    ///
    /// The sign guard byte is stripped, so the result is empty-free and has
    /// no leading zero unless the value itself is zero (`[0x00]`).
    pub fn read_unsigned_integer(&mut self) -> Result<&'a [u8]> {
        let content = self.read_expected(TAG_INTEGER)?;
        match content {
            [] => Err(malformed("empty integer")),
            [first, ..] if first & 0x80 != 0 => Err(malformed("negative integer")),
            [0x00] => Ok(content),
            [0x00, second, ..] if second & 0x80 == 0 => Err(malformed("non-minimal integer")),
            [0x00, rest @ ..] => Ok(rest),
            _ => Ok(content),
        }
    }

    /// Require that every byte has been consumed
    pub fn finish(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(malformed("trailing data"))
        }
    }
}

/// Number of bytes the length field for `len` occupies
pub fn length_len(len: usize) -> usize {
    match len {
        0..=0x7F => 1,
        0x80..=0xFF => 2,
        0x100..=0xFFFF => 3,
        0x1_0000..=0xFF_FFFF => 4,
        _ => 5,
    }
}

/// Total size of an element with `content_len` content bytes
pub fn element_len(content_len: usize) -> Option<usize> {
    1usize
        .checked_add(length_len(content_len))?
        .checked_add(content_len)
}

/// Magnitude of a big-endian unsigned integer with leading zeros removed
///
/// Returns the stripped bytes and whether a `0x00` sign guard is needed.
/// Zero is represented by an empty slice with no guard.
pub fn integer_magnitude(be: &[u8]) -> (&[u8], bool) {
    let start = be.iter().position(|&b| b != 0).unwrap_or(be.len());
    let magnitude = &be[start..];
    let guard = magnitude.first().map_or(false, |&b| b & 0x80 != 0);
    (magnitude, guard)
}

/// Content length of the INTEGER encoding a big-endian unsigned value
pub fn integer_content_len(be: &[u8]) -> usize {
    let (magnitude, guard) = integer_magnitude(be);
    if magnitude.is_empty() {
        1
    } else {
        magnitude.len() + guard as usize
    }
}

/// Forward-only writer into a caller-sized buffer
///
/// Callers compute the exact encoded size up front; running past the end is
/// an internal error rather than a panic.
#[derive(Debug)]
pub struct DerWriter<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl<'a> DerWriter<'a> {
    pub fn new(out: &'a mut [u8]) -> Self {
        Self { out, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self
            .pos
            .checked_add(bytes.len())
            .filter(|&end| end <= self.out.len())
            .ok_or_else(|| Error::unexpected("der", "encoding overran its computed size"))?;
        self.out[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Write a tag and its definite-length field
    pub fn write_header(&mut self, tag: u8, len: usize) -> Result<()> {
        self.write_bytes(&[tag])?;
        let n = length_len(len);
        if n == 1 {
            return self.write_bytes(&[len as u8]);
        }
        let be = (len as u64).to_be_bytes();
        self.write_bytes(&[0x80 | (n as u8 - 1)])?;
        self.write_bytes(&be[be.len() - (n - 1)..])
    }

    /// Write a big-endian unsigned value as a minimal INTEGER
    pub fn write_unsigned_integer(&mut self, be: &[u8]) -> Result<()> {
        let (magnitude, guard) = integer_magnitude(be);
        self.write_header(TAG_INTEGER, integer_content_len(be))?;
        if magnitude.is_empty() || guard {
            self.write_bytes(&[0x00])?;
        }
        self.write_bytes(magnitude)
    }
}
