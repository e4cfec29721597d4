//! EC key handles
//!
//! A handle moves through `Uninitialized -> Public | Private -> Freed`. Every
//! operation checks the variant first, so a stale or wrong-kind handle is an
//! `InvalidParameter` error rather than a use of released provider state.

use core::fmt;

use ecshim_api::{Error, Result};
use ecshim_params::KeyKind;

/// Provider key together with the coordinate width it was imported at
pub struct NativeKey<K> {
    key: K,
    width: usize,
}

impl<K> NativeKey<K> {
    pub(crate) fn new(key: K, width: usize) -> Self {
        Self { key, width }
    }

    /// The provider's key object
    pub fn provider_key(&self) -> &K {
        &self.key
    }

    /// Coordinate width `L` in bytes
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<K> fmt::Debug for NativeKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeKey")
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Lifecycle state of an [`EcKey`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Uninitialized,
    Valid(KeyKind),
    Freed,
}

/// Handle to an EC key held by a crypto provider
///
/// Not `Clone`: the provider resource has exactly one owner. Dropping a
/// valid handle releases the resource just like [`free`](Self::free).
pub enum EcKey<K> {
    Uninitialized,
    Public(NativeKey<K>),
    Private(NativeKey<K>),
    Freed,
}

impl<K> Default for EcKey<K> {
    fn default() -> Self {
        EcKey::Uninitialized
    }
}

impl<K> EcKey<K> {
    pub(crate) fn public(key: K, width: usize) -> Self {
        EcKey::Public(NativeKey::new(key, width))
    }

    pub(crate) fn private(key: K, width: usize) -> Self {
        EcKey::Private(NativeKey::new(key, width))
    }

    pub fn state(&self) -> KeyState {
        match self {
            EcKey::Uninitialized => KeyState::Uninitialized,
            EcKey::Public(_) => KeyState::Valid(KeyKind::Public),
            EcKey::Private(_) => KeyState::Valid(KeyKind::Private),
            EcKey::Freed => KeyState::Freed,
        }
    }

    /// Kind of a valid handle, `None` otherwise
    pub fn kind(&self) -> Option<KeyKind> {
        match self.state() {
            KeyState::Valid(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether the handle is valid and of `kind`
    pub fn is_valid(&self, kind: KeyKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Coordinate width of a valid handle
    pub fn width(&self) -> Option<usize> {
        match self {
            EcKey::Public(native) | EcKey::Private(native) => Some(native.width),
            _ => None,
        }
    }

    /// Borrow the native key, requiring `kind`
    pub fn native(&self, kind: KeyKind, context: &'static str) -> Result<&NativeKey<K>> {
        match (self, kind) {
            (EcKey::Public(native), KeyKind::Public) | (EcKey::Private(native), KeyKind::Private) => {
                Ok(native)
            }
            _ => {
                tracing::debug!(context, expected = ?kind, state = ?self.state(), "rejected key handle");
                Err(Error::invalid_parameter(
                    context,
                    format!("expected a valid {kind:?} key, found {:?}", self.state()),
                ))
            }
        }
    }

    /// Release the provider resource and mark the handle freed
    ///
    /// Freeing a handle that is not valid is an error and changes nothing.
    pub fn free(&mut self) -> Result<()> {
        match self {
            EcKey::Public(_) | EcKey::Private(_) => {
                // Dropping the old variant drops the provider key
                *self = EcKey::Freed;
                Ok(())
            }
            _ => {
                tracing::debug!(state = ?self.state(), "free on invalid key handle");
                Err(Error::invalid_parameter(
                    "free",
                    format!("key handle is {:?}", self.state()),
                ))
            }
        }
    }

    /// Free only if the handle is valid and of `kind`
    pub fn free_kind(&mut self, kind: KeyKind) -> Result<()> {
        self.native(kind, "free")?;
        self.free()
    }
}

impl<K> fmt::Debug for EcKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcKey::Public(native) | EcKey::Private(native) => f
                .debug_struct("EcKey")
                .field("state", &self.state())
                .field("width", &native.width)
                .finish_non_exhaustive(),
            _ => f.debug_struct("EcKey").field("state", &self.state()).finish(),
        }
    }
}
