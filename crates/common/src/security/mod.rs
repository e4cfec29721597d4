//! Security primitives for handling key material

pub mod secret;

pub use secret::SecretVec;
