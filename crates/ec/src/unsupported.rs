//! EC operations without a working implementation
//!
//! Each one logs the call and returns `Unsupported`; none produces a key or
//! a boolean.

use ecshim_api::{EcProvider, Error, Result};
use ecshim_params::CurveType;

use crate::bridge::{Ec, KeyHandle};

fn unsupported<T>(feature: &'static str) -> Result<T> {
    tracing::debug!(feature, "unsupported EC operation called");
    Err(Error::Unsupported { feature })
}

impl<P: EcProvider> Ec<P> {
    /// Always `Unsupported`
    pub fn generate_key_pair(&self, curve: CurveType) -> Result<(KeyHandle<P>, KeyHandle<P>)> {
        let _ = curve;
        unsupported("EC key pair generation")
    }

    /// Always `Unsupported`
    pub fn generate_key_pair_from_private(
        &self,
        curve: CurveType,
        scalar: &[u8],
    ) -> Result<(KeyHandle<P>, KeyHandle<P>)> {
        let _ = (curve, scalar);
        unsupported("EC key pair generation from a private scalar")
    }

    /// Always `Unsupported`
    pub fn private_key_to_der(&self, key: &KeyHandle<P>, out: Option<&mut [u8]>) -> Result<usize> {
        let _ = (key, out);
        unsupported("EC private key export")
    }

    /// Always `Unsupported`; never answers `true` or `false`
    pub fn is_valid_raw_private_key(&self, curve: CurveType, scalar: &[u8]) -> Result<bool> {
        let _ = (curve, scalar);
        unsupported("raw EC private key validation")
    }
}
