//! Status reporting for the software provider
//!
//! Failures carry NTSTATUS-style codes so callers see the same numbers a
//! platform provider would return.

use ecshim_api::Error;
use thiserror::Error as ThisError;

pub const STATUS_INVALID_PARAMETER: u32 = 0xC000_000D;
pub const STATUS_BUFFER_TOO_SMALL: u32 = 0xC000_0023;
pub const STATUS_NOT_SUPPORTED: u32 = 0xC000_00BB;
pub const STATUS_INVALID_SIGNATURE: u32 = 0xC000_A000;

/// Internal failure of a provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ProviderError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("buffer too small ({required} bytes required)")]
    BufferTooSmall { required: usize },

    #[error("not supported: {0}")]
    NotSupported(&'static str),

    #[error("invalid signature")]
    InvalidSignature,
}

impl ProviderError {
    /// Status code a platform provider would report
    pub fn status(&self) -> u32 {
        match self {
            ProviderError::InvalidParameter(_) => STATUS_INVALID_PARAMETER,
            ProviderError::BufferTooSmall { .. } => STATUS_BUFFER_TOO_SMALL,
            ProviderError::NotSupported(_) => STATUS_NOT_SUPPORTED,
            ProviderError::InvalidSignature => STATUS_INVALID_SIGNATURE,
        }
    }

    /// Translate into the bridge taxonomy, labelled with `context`
    pub fn into_api(self, context: &'static str) -> Error {
        match self {
            ProviderError::BufferTooSmall { required } => {
                tracing::trace!(context, required, "provider size query");
                Error::BufferTooSmall { context, required }
            }
            ProviderError::InvalidSignature => {
                tracing::debug!(context, "signature rejected by provider");
                Error::VerificationFailed { context }
            }
            other => {
                let code = other.status();
                tracing::error!(context, status = format_args!("{code:#010x}"), reason = %other, "provider call failed");
                Error::ProviderFailure { context, code }
            }
        }
    }
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        err.into_api("provider")
    }
}

pub(crate) type ProviderResult<T> = core::result::Result<T, ProviderError>;
