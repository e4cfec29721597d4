//! # ecshim
//!
//! EC key-material and ECDSA signature bridging between DER and a native,
//! blob-oriented crypto provider.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecshim = "0.3"
//! ```
//!
//! ## Features
//!
//! - `software-provider` (default): a P-256 provider built on RustCrypto
//! - `serde`: serde derives on curve and format descriptors
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecshim-api`]: error taxonomy and the provider contract
//! - [`ecshim-params`]: curve selectors, blob magics and OIDs
//! - [`ecshim-common`]: secret buffers and the native blob layout
//! - [`ecshim-ec`]: key import, signature codec and the [`Ec`] bridge
//! - [`ecshim-provider`]: the software provider
//!
//! ```ignore
//! use ecshim::prelude::*;
//!
//! let ec = Ec::new(SoftwareProvider::new());
//! let private = ec.private_key_from_der(&sec1_der)?;
//! let public = ec.public_key_from_private(&private)?;
//! let signature = ec.sign_to_vec(&private, &digest)?;
//! ec.verify(&public, &digest, &signature)?;
//! ```

// Core re-exports (always available)
pub use ecshim_api as api;
pub use ecshim_common as common;
pub use ecshim_ec as ec;
pub use ecshim_internal as internal;
pub use ecshim_params as params;

// Feature-gated re-exports
#[cfg(feature = "software-provider")]
pub use ecshim_provider as provider;

pub use ecshim_ec::{Ec, EcKey, KeyHandle, KeyState};

/// Common imports for ecshim users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt, SizeQuery, SizeQueryExt};

    // Re-export the provider contract
    pub use crate::api::EcProvider;

    // Re-export format descriptors
    pub use crate::params::{BlobType, CurveType, KeyKind, DEFAULT_CURVE};

    // Re-export the bridge and its handles
    pub use crate::ec::{Ec, EcKey, KeyHandle, KeyState};

    // Re-export the signature codec
    pub use crate::ec::{
        der_signature_to_vec, max_der_signature_size, read_der, write_der, RawSignature,
    };

    // Re-export security types
    pub use crate::common::SecretVec;

    #[cfg(feature = "software-provider")]
    pub use crate::provider::SoftwareProvider;
}
