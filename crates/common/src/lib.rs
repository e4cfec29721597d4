//! Common implementations and shared functionality for the ecshim bridge
//!
//! This crate holds what both sides of the provider contract need: secret
//! buffers that wipe themselves and the native ECC key blob layout.

pub mod ec_common;
pub mod security;

// Re-export core security types
pub use security::SecretVec;

pub use ec_common::NativeBlob;
