//! Shared value types for the bridge API

/// Outcome of an operation that follows the size-query protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeQuery {
    /// Nothing was written; an output buffer of this many bytes is needed
    NeedsCapacity(usize),
    /// This many bytes were written to the output buffer
    Written(usize),
}

impl SizeQuery {
    /// Byte count carried by either variant
    pub fn len(&self) -> usize {
        match *self {
            SizeQuery::NeedsCapacity(n) | SizeQuery::Written(n) => n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_written(&self) -> bool {
        matches!(self, SizeQuery::Written(_))
    }
}
