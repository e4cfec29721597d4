//! Keys held by the software provider

use core::fmt;

use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{EncodedPoint, FieldBytes};

use crate::error::{ProviderError, ProviderResult};

/// Coordinate and scalar width on P-256
pub const P256_WIDTH: usize = 32;

/// An imported P-256 key
///
/// Public keys keep the coordinates exactly as imported and are checked
/// against the curve only when used for verification, as the platform
/// provider does. Private keys hold a validated scalar; the public point is
/// derived from it.
pub struct SoftwareKey {
    material: KeyMaterial,
}

enum KeyMaterial {
    Public { x: FieldBytes, y: FieldBytes },
    Private(SigningKey),
}

impl SoftwareKey {
    pub(crate) fn public(x: &[u8], y: &[u8]) -> ProviderResult<Self> {
        if x.len() != P256_WIDTH || y.len() != P256_WIDTH {
            return Err(ProviderError::InvalidParameter("coordinate width"));
        }
        Ok(Self {
            material: KeyMaterial::Public {
                x: *FieldBytes::from_slice(x),
                y: *FieldBytes::from_slice(y),
            },
        })
    }

    pub(crate) fn private(d: &[u8]) -> ProviderResult<Self> {
        if d.len() != P256_WIDTH {
            return Err(ProviderError::InvalidParameter("scalar width"));
        }
        let signing_key = SigningKey::from_bytes(FieldBytes::from_slice(d))
            .map_err(|_| ProviderError::InvalidParameter("scalar out of range"))?;
        Ok(Self {
            material: KeyMaterial::Private(signing_key),
        })
    }

    pub fn is_private(&self) -> bool {
        matches!(self.material, KeyMaterial::Private(_))
    }

    pub(crate) fn signing_key(&self) -> ProviderResult<&SigningKey> {
        match &self.material {
            KeyMaterial::Private(key) => Ok(key),
            KeyMaterial::Public { .. } => Err(ProviderError::InvalidParameter("not a private key")),
        }
    }

    /// Big-endian affine coordinates of the public point
    pub(crate) fn coordinates(&self) -> ProviderResult<(FieldBytes, FieldBytes)> {
        match &self.material {
            KeyMaterial::Public { x, y } => Ok((*x, *y)),
            KeyMaterial::Private(key) => {
                let point = key.verifying_key().as_affine().to_encoded_point(false);
                match (point.x(), point.y()) {
                    (Some(x), Some(y)) => Ok((*x, *y)),
                    _ => Err(ProviderError::InvalidParameter("point at infinity")),
                }
            }
        }
    }

    /// Curve-checked verifying key for this key's public point
    pub(crate) fn verifying_key(&self) -> ProviderResult<VerifyingKey> {
        match &self.material {
            KeyMaterial::Private(key) => Ok(key.verifying_key().clone()),
            KeyMaterial::Public { x, y } => {
                let point = EncodedPoint::from_affine_coordinates(x, y, false);
                VerifyingKey::from_encoded_point(&point)
                    .map_err(|_| ProviderError::InvalidParameter("point not on curve"))
            }
        }
    }
}

impl fmt::Debug for SoftwareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.material {
            KeyMaterial::Public { .. } => f.write_str("SoftwareKey::Public"),
            KeyMaterial::Private(_) => f.write_str("SoftwareKey::Private([REDACTED])"),
        }
    }
}
