//! Public keys from raw affine coordinates

use ecshim_api::{EcProvider, Error, Result};
use ecshim_params::{CurveType, INT_MAX};

use crate::blob::public_blob;
use crate::bridge::{Ec, KeyHandle};

impl<P: EcProvider> Ec<P> {
    /// Build a public key from big-endian `x` and `y` on `curve`
    ///
    /// Lengths are checked before anything is allocated or handed to the
    /// provider. The coordinates are not checked against the curve here;
    /// that is the provider's call.
    pub fn public_key_from_coordinates(
        &self,
        curve: CurveType,
        x: &[u8],
        y: &[u8],
    ) -> Result<KeyHandle<P>> {
        const CONTEXT: &str = "public_key_from_coordinates";
        if x.is_empty() || y.is_empty() {
            return Err(Error::invalid_parameter(CONTEXT, "empty coordinate"));
        }
        if x.len() > INT_MAX || y.len() > INT_MAX {
            return Err(Error::invalid_parameter(CONTEXT, "coordinate too long"));
        }
        if x.len() != y.len() {
            return Err(Error::invalid_parameter(
                CONTEXT,
                format!("coordinate lengths differ ({} != {})", x.len(), y.len()),
            ));
        }

        let blob = public_blob(curve, x, y)?;
        self.import_public_blob(&blob, x.len(), CONTEXT)
    }
}
