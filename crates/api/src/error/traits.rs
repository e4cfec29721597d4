//! Error handling traits for the bridge

use super::types::{Error, Result};
use crate::types::SizeQuery;

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Re-label the error context, keeping the error kind
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

/// Folds the two-pass size-query protocol into one value
///
/// `Err(BufferTooSmall { required })` becomes `Ok(NeedsCapacity(required))`,
/// `Ok(n)` becomes `Ok(Written(n))`; every other error is passed through.
pub trait SizeQueryExt: Sized {
    fn size_query(self) -> Result<SizeQuery>;
}

impl SizeQueryExt for Result<usize> {
    fn size_query(self) -> Result<SizeQuery> {
        match self {
            Ok(written) => Ok(SizeQuery::Written(written)),
            Err(Error::BufferTooSmall { required, .. }) => Ok(SizeQuery::NeedsCapacity(required)),
            Err(e) => Err(e),
        }
    }
}
