//! Error type definitions for curve setup and the signature protocol

use thiserror::Error;

/// Primary error type for ecgost operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid or degenerate domain parameters
    #[error("Domain error in {context}: {message}")]
    Domain {
        context: &'static str,
        message: String,
    },

    /// No curve point generates a subgroup of the requested order
    #[error("No base point of order {order} exists on the curve")]
    NoGenerator { order: u64 },

    /// A lookup that cannot miss did miss; always a bug
    #[error("Internal error in {context}: {message}")]
    Internal {
        context: &'static str,
        message: String,
    },

    /// Signing could not produce non-zero `r` and `s`
    #[error("Signature generation failed in {context}: {message}")]
    SignatureGeneration {
        context: &'static str,
        message: String,
    },

    /// A verification step rejected the signature
    ///
    /// Verification never returns this; it is recorded in the verification
    /// context so callers can see which step failed.
    #[error("Signature rejected at step {step}: {reason}")]
    SignatureRejected { step: u8, reason: String },

    /// Caller supplied an out-of-range value
    #[error("Invalid parameter in {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// Shorthand for a [`Error::Domain`] error
    pub fn domain(context: &'static str, message: impl Into<String>) -> Self {
        Error::Domain {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::Internal`] error
    pub fn internal(context: &'static str, message: impl Into<String>) -> Self {
        Error::Internal {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`] error
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Whether the error is a construction-time failure
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Error::Domain { .. } | Error::NoGenerator { .. } | Error::InvalidParameter { .. }
        )
    }
}

/// Result type for ecgost operations
pub type Result<T> = core::result::Result<T, Error>;
