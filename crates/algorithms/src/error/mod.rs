//! Error handling for curve arithmetic and hashing

use std::borrow::Cow;
use std::fmt;

use ecgost_api::Error as CoreError;

pub mod validate;

/// The error type for curve and group operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Degenerate or inconsistent domain parameters
    Domain {
        /// Operation that detected the problem
        context: &'static str,
        /// What is wrong with the domain
        reason: Cow<'static, str>,
    },

    /// No enumerated point has the requested order
    NoGenerator {
        /// Requested subgroup order
        order: u64,
    },

    /// Scalar multiplication needed a summand it never computed
    MissingSummand {
        /// Multiplier that was expected in the cache
        summand: u64,
        /// Multiplier being computed
        target: u64,
    },

    /// Subgroup table has no entry for a multiplier
    MissingMultiple {
        /// Multiplier that was looked up
        multiplier: u64,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Domain error
    pub fn domain<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Domain {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for curve and group operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Domain { context, reason } => {
                write!(f, "Invalid domain in {}: {}", context, reason)
            }
            Error::NoGenerator { order } => {
                write!(f, "No curve point generates a subgroup of order {}", order)
            }
            Error::MissingSummand { summand, target } => {
                write!(
                    f,
                    "Point {}P does not exist while computing {}P (missing summand)",
                    summand, target
                )
            }
            Error::MissingMultiple { multiplier } => {
                write!(f, "Subgroup table has no entry for {}P", multiplier)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "curve parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Domain { context, reason } => CoreError::Domain {
                context,
                message: reason.into_owned(),
            },
            Error::NoGenerator { order } => CoreError::NoGenerator { order },
            err @ Error::MissingSummand { .. } => CoreError::Internal {
                context: "scalar multiplication",
                message: err.to_string(),
            },
            err @ Error::MissingMultiple { .. } => CoreError::Internal {
                context: "subgroup lookup",
                message: err.to_string(),
            },
        }
    }
}
