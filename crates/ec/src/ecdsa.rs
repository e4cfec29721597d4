//! ECDSA sign and verify over DER signatures
//!
//! The provider speaks raw `r || s`; callers speak DER. Signing reports the
//! worst-case DER size whenever it reports a size at all, because ECDSA is
//! randomised and the exact encoding length changes between signatures.

use ecshim_api::{EcProvider, Error, Result};
use ecshim_params::KeyKind;

use crate::bridge::{Ec, KeyHandle};
use crate::signature::{max_der_signature_size, read_der, write_der};

impl<P: EcProvider> Ec<P> {
    /// Sign `digest` with a private key, writing a DER signature to `out`
    ///
    /// With `None`, or a buffer too short for this signature, returns
    /// `BufferTooSmall` carrying [`max_der_signature_size`] of the raw length.
    pub fn sign(&self, key: &KeyHandle<P>, digest: &[u8], out: Option<&mut [u8]>) -> Result<usize> {
        const CONTEXT: &str = "sign";
        let native = key.native(KeyKind::Private, CONTEXT)?;
        if digest.is_empty() {
            return Err(Error::invalid_parameter(CONTEXT, "empty digest"));
        }

        let raw_len = match self.provider().sign_hash(native.provider_key(), digest, None) {
            Err(Error::BufferTooSmall { required, .. }) => required,
            Err(e) => return Err(e.with_context(CONTEXT)),
            Ok(_) => {
                return Err(Error::unexpected(
                    CONTEXT,
                    "provider signed into an absent buffer",
                ))
            }
        };
        let max_encoded = max_der_signature_size(raw_len);
        tracing::trace!(raw_len, max_encoded, "sign size query");

        let out = match out {
            Some(out) => out,
            None => return Err(Error::buffer_too_small(CONTEXT, max_encoded)),
        };

        let mut raw = Vec::new();
        raw.try_reserve_exact(raw_len)?;
        raw.resize(raw_len, 0);
        let written = self
            .provider()
            .sign_hash(native.provider_key(), digest, Some(&mut raw[..]))
            .map_err(|e| e.with_context(CONTEXT))?;
        if written != raw_len || raw_len % 2 != 0 {
            return Err(Error::unexpected(
                CONTEXT,
                format!("raw signature of {written} bytes, expected even length {raw_len}"),
            ));
        }

        let (r, s) = raw.split_at(raw_len / 2);
        match write_der(r, s, Some(out)) {
            Err(Error::BufferTooSmall { required, .. }) => Err(Error::buffer_too_small(
                CONTEXT,
                max_encoded.max(required),
            )),
            other => other.map_err(|e| e.with_context(CONTEXT)),
        }
    }

    /// Sign into a freshly allocated DER signature
    pub fn sign_to_vec(&self, key: &KeyHandle<P>, digest: &[u8]) -> Result<Vec<u8>> {
        let capacity = match self.sign(key, digest, None) {
            Err(Error::BufferTooSmall { required, .. }) => required,
            Err(e) => return Err(e),
            Ok(_) => return Err(Error::unexpected("sign_to_vec", "size query wrote output")),
        };
        let mut out = Vec::new();
        out.try_reserve_exact(capacity)?;
        out.resize(capacity, 0);
        let written = self.sign(key, digest, Some(&mut out[..]))?;
        out.truncate(written);
        Ok(out)
    }

    /// Verify a DER signature over `digest` with a public key
    ///
    /// A structurally invalid signature is `DecodeFailure`; a well-formed one
    /// that does not match is `VerificationFailed`.
    pub fn verify(&self, key: &KeyHandle<P>, digest: &[u8], der_signature: &[u8]) -> Result<()> {
        const CONTEXT: &str = "verify";
        let native = key.native(KeyKind::Public, CONTEXT)?;
        if der_signature.is_empty() || der_signature.len() as u64 > u64::from(u32::MAX) {
            return Err(Error::invalid_parameter(
                CONTEXT,
                "signature must be 1..=u32::MAX bytes",
            ));
        }
        if digest.is_empty() {
            return Err(Error::invalid_parameter(CONTEXT, "empty digest"));
        }

        let raw = read_der(der_signature, native.width()).map_err(|e| e.with_context(CONTEXT))?;
        self.provider()
            .verify_signature(native.provider_key(), digest, raw.as_bytes())
            .map_err(|e| e.with_context(CONTEXT))
    }
}
