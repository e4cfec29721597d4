//! Public key equality

use ecshim_api::{EcProvider, Result};
use ecshim_internal::ct_eq;
use ecshim_params::KeyKind;

use crate::bridge::{Ec, KeyHandle};

impl<P: EcProvider> Ec<P> {
    /// Whether two public keys hold the same point
    ///
    /// Compares the canonical exported blobs in constant time. A failed
    /// export is an error, never `false`.
    pub fn public_key_equal(&self, a: &KeyHandle<P>, b: &KeyHandle<P>) -> Result<bool> {
        const CONTEXT: &str = "public_key_equal";
        let a = a.native(KeyKind::Public, CONTEXT)?;
        let b = b.native(KeyKind::Public, CONTEXT)?;

        let blob_a = self.export_public_blob(a.provider_key(), CONTEXT)?;
        let blob_b = self.export_public_blob(b.provider_key(), CONTEXT)?;
        Ok(ct_eq(blob_a.as_slice(), blob_b.as_slice()))
    }
}
