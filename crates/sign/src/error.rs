//! Error types for the signature crate

use core::fmt;

use ecgost_api::Error as ApiError;

/// Errors that can occur while setting up or running the signature engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter
    InvalidParameter(String),

    /// Degenerate or inconsistent domain parameters
    Domain {
        context: &'static str,
        details: String,
    },

    /// No base point of the subgroup order exists
    NoGenerator { order: u64 },

    /// Key generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// A verification step rejected the signature
    Rejected { step: u8, details: String },

    /// Internal error
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::Domain { context, details } => {
                write!(f, "Invalid domain in {}: {}", context, details)
            }
            Error::NoGenerator { order } => {
                write!(f, "No base point of order {} exists on the curve", order)
            }
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "{} key generation failed: {}", algorithm, details)
            }
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
            Error::Rejected { step, details } => {
                write!(f, "Signature rejected at step {}: {}", step, details)
            }
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<ecgost_algorithms::error::Error> for Error {
    fn from(err: ecgost_algorithms::error::Error) -> Self {
        use ecgost_algorithms::error::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Domain { context, reason } => Error::Domain {
                context,
                details: reason.into_owned(),
            },
            AlgoError::NoGenerator { order } => Error::NoGenerator { order },
            err @ (AlgoError::MissingSummand { .. } | AlgoError::MissingMultiple { .. }) => {
                Error::Internal(err.to_string())
            }
        }
    }
}

// Convert to api::Error
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidParameter(message) => ApiError::InvalidParameter {
                context: "GOST",
                message,
            },
            Error::Domain { context, details } => ApiError::Domain {
                context,
                message: details,
            },
            Error::NoGenerator { order } => ApiError::NoGenerator { order },
            Error::KeyGeneration { algorithm, details } => ApiError::InvalidParameter {
                context: algorithm,
                message: details,
            },
            Error::SignatureGeneration { algorithm, details } => {
                ApiError::SignatureGeneration {
                    context: algorithm,
                    message: details,
                }
            }
            Error::Rejected { step, details } => ApiError::SignatureRejected {
                step,
                reason: details,
            },
            Error::Internal(message) => ApiError::Internal {
                context: "GOST",
                message,
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
