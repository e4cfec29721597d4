//! Software crypto provider for the ecshim bridge
//!
//! Implements [`ecshim_api::EcProvider`] for ECDSA over NIST P-256 with the
//! `p256` crate. It parses and produces the same native blobs a platform
//! provider does, so the bridge can be exercised end to end without one.

pub mod error;
pub mod key;
pub mod software;

pub use error::ProviderError;
pub use key::SoftwareKey;
pub use software::{SoftwareProvider, RAW_SIGNATURE_LEN};
