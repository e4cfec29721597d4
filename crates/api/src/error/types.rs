//! Error type definitions for the bridge operations

use std::collections::TryReserveError;
use std::string::String;

use thiserror::Error as ThisError;

/// Primary error type for bridge operations
///
/// Every operation reports exactly one of these kinds. The `context` names
/// the failing operation; `message`/`code` carry diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Null/zero/oversized/mismatched inputs, or a handle in the wrong state
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Output buffer missing or too short; retry with `required` bytes
    #[error("{context}: buffer too small ({required} bytes required)")]
    BufferTooSmall {
        context: &'static str,
        required: usize,
    },

    /// Malformed DER/ASN.1 input
    #[error("{context}: decode failure: {message}")]
    DecodeFailure {
        context: &'static str,
        message: String,
    },

    /// The crypto provider rejected the operation
    #[error("{context}: crypto provider failure (status {code:#010x})")]
    ProviderFailure {
        context: &'static str,
        code: u32,
    },

    /// A well-formed signature did not verify under the key
    #[error("{context}: signature verification failed")]
    VerificationFailed { context: &'static str },

    /// An allocation could not be satisfied
    #[error("{context}: out of memory")]
    OutOfMemory { context: &'static str },

    /// The operation is intentionally not implemented by this binding
    #[error("{feature} is not supported")]
    Unsupported { feature: &'static str },

    /// Internal invariant violation
    #[error("{context}: unexpected: {message}")]
    Unexpected {
        context: &'static str,
        message: String,
    },
}

/// Fieldless view of [`Error`] for matching on the kind alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    BufferTooSmall,
    DecodeFailure,
    ProviderFailure,
    VerificationFailed,
    OutOfMemory,
    Unsupported,
    Unexpected,
}

/// Result type for bridge operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    pub fn decode(context: &'static str, message: impl Into<String>) -> Self {
        Self::DecodeFailure {
            context,
            message: message.into(),
        }
    }

    pub fn buffer_too_small(context: &'static str, required: usize) -> Self {
        Self::BufferTooSmall { context, required }
    }

    /// Build an `Unexpected` error; these are defects and always logged.
    pub fn unexpected(context: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(context, %message, "internal invariant violated");
        Self::Unexpected { context, message }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Self::DecodeFailure { .. } => ErrorKind::DecodeFailure,
            Self::ProviderFailure { .. } => ErrorKind::ProviderFailure,
            Self::VerificationFailed { .. } => ErrorKind::VerificationFailed,
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Size to retry with, for `BufferTooSmall`
    pub fn required_size(&self) -> Option<usize> {
        match self {
            Self::BufferTooSmall { required, .. } => Some(*required),
            _ => None,
        }
    }

    /// Replace the context label, keeping kind and diagnostics
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::BufferTooSmall { required, .. } => Self::BufferTooSmall { context, required },
            Self::DecodeFailure { message, .. } => Self::DecodeFailure { context, message },
            Self::ProviderFailure { code, .. } => Self::ProviderFailure { context, code },
            Self::VerificationFailed { .. } => Self::VerificationFailed { context },
            Self::OutOfMemory { .. } => Self::OutOfMemory { context },
            Self::Unsupported { feature } => Self::Unsupported { feature },
            Self::Unexpected { message, .. } => Self::Unexpected { context, message },
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory {
            context: "allocation",
        }
    }
}
