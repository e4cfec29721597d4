//! Public API traits and types for the ecshim bridge
//!
//! This crate defines the error taxonomy shared by every ecshim component,
//! the contract a crypto provider must honour, and the value types used by
//! the two-pass size-query protocol.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt, SizeQueryExt};
pub use traits::EcProvider;
pub use types::SizeQuery;

// Format descriptors travel with the provider contract
pub use ecshim_params as params;
