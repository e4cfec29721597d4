//! Trait definitions for the bridge

pub mod provider;

pub use provider::EcProvider;
