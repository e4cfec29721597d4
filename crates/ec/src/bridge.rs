//! The bridge object
//!
//! [`Ec`] owns a crypto provider and exposes every key and signature
//! operation as a method. Operations only take `&self`; all per-call state
//! lives in RAII buffers local to the call.

use ecshim_api::{EcProvider, Error, Result};
use ecshim_common::SecretVec;
use ecshim_params::{BlobType, KeyKind};

use crate::handle::EcKey;

/// Key handle type produced by a bridge over `P`
pub type KeyHandle<P> = EcKey<<P as EcProvider>::Key>;

/// EC key-material and signature bridge over a crypto provider
#[derive(Debug, Clone, Default)]
pub struct Ec<P> {
    provider: P,
}

impl<P: EcProvider> Ec<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Free a handle that must hold a private key
    pub fn free_private_key(&self, key: &mut KeyHandle<P>) -> Result<()> {
        key.free_kind(KeyKind::Private)
    }

    /// Free a handle that must hold a public key
    pub fn free_public_key(&self, key: &mut KeyHandle<P>) -> Result<()> {
        key.free_kind(KeyKind::Public)
    }

    /// Export the canonical public blob of a provider key
    ///
    /// Two passes: size query, then export into a buffer of exactly that
    /// size. The buffer wipes itself on release.
    pub(crate) fn export_public_blob(
        &self,
        key: &P::Key,
        context: &'static str,
    ) -> Result<SecretVec> {
        let required = match self.provider.export_key(key, BlobType::EccPublic, None) {
            Err(Error::BufferTooSmall { required, .. }) => required,
            Err(e) => {
                tracing::debug!(
                    provider = self.provider.name(),
                    context,
                    "public blob export failed"
                );
                return Err(e.with_context(context));
            }
            Ok(_) => {
                return Err(Error::unexpected(
                    context,
                    "provider exported a blob into an absent buffer",
                ))
            }
        };
        tracing::trace!(
            provider = self.provider.name(),
            context,
            required,
            "public blob size query"
        );

        let mut blob = SecretVec::try_zeroed(required)?;
        let written = self
            .provider
            .export_key(key, BlobType::EccPublic, Some(blob.as_mut_slice()))
            .map_err(|e| e.with_context(context))?;
        if written != required {
            return Err(Error::unexpected(
                context,
                format!("provider reported {required} bytes but wrote {written}"),
            ));
        }
        Ok(blob)
    }
}
