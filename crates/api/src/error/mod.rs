//! Error handling for the bridge

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::{ResultExt, SizeQueryExt};
