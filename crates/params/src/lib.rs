//! Constant values for the ecshim provider bridge
//!
//! Everything in this crate is immutable configuration data: curve
//! selectors, provider algorithm and blob-type selectors, native blob magic
//! numbers and the object identifiers used by the DER key structures.

#![cfg_attr(not(test), no_std)]

pub mod ecc;
pub mod oid;

pub use ecc::{
    algorithm_for, coordinate_width, curve_for_magic, magic, AlgorithmId, BlobType, CurveType, KeyEncoding, KeyFormat, KeyKind,
    DEFAULT_CURVE, ECCKEY_BLOB_HEADER_SIZE, INT_MAX, PRIVATE_EC_KEY_FORMAT, PUBLIC_EC_KEY_FORMAT,
};
