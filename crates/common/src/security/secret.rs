//! Secret data types with guaranteed zeroization
//!
//! Every transient buffer that may hold key material (DER copies, decoded
//! scalars, native blobs, exported public blobs) lives in a [`SecretVec`],
//! so it is wiped on every exit path, `?` early returns included.

use core::fmt;
use core::ops::{Deref, DerefMut};

use ecshim_api::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret vector that guarantees zeroization
///
/// Construction goes through `try_reserve_exact`, so an allocation the
/// system cannot satisfy surfaces as [`Error::OutOfMemory`] instead of an
/// abort. The length is fixed at construction.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Allocate `len` zero bytes
    pub fn try_zeroed(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { context: "secret buffer" })?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Deref for SecretVec {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for SecretVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}
