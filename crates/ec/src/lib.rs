//! EC key-material and ECDSA signature bridging
//!
//! Converts EC keys and signatures between DER and the fixed-width native
//! blob format a platform crypto provider consumes, and drives the provider
//! through the [`Ec`] bridge.
//!
//! ```text
//! DER key  --[import]-->  native blob  --provider-->  EcKey
//! EcKey + digest  --[sign]-->  raw r||s  --[signature]-->  DER signature
//! DER signature  --[signature]-->  raw r||s  --provider verify
//! ```

pub mod blob;
pub mod bridge;
pub mod coordinates;
pub mod asn1;
pub mod ecdsa;
pub mod equality;
pub mod handle;
pub mod import;
pub mod signature;
pub mod unsupported;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::{Ec, KeyHandle};
pub use handle::{EcKey, KeyState, NativeKey};
pub use signature::{
    der_signature_to_vec, max_der_signature_size, read_der, write_der, RawSignature,
    MAX_ENCODED_OVERHEAD,
};
