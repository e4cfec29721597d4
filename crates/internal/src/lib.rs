//! Internal utilities for the ecshim crates
//!
//! Pure functions over caller-supplied buffers: byte-order transforms between
//! big-endian wire order and the provider's native order, and constant-time
//! comparison.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;
pub mod endian;

pub use constant_time::ct_eq;
pub use endian::reverse_copy;
