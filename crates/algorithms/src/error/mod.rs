//! Error handling for arithmetic and curve primitives

use std::borrow::Cow;

use ecctool_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for arithmetic and curve primitives
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed textual or binary input
    #[error("Parse error in {context}: {reason}")]
    Parse {
        /// What was being parsed
        context: &'static str,
        /// Why it was rejected
        reason: Cow<'static, str>,
    },

    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Feature not implemented
    #[error("Feature not implemented: {feature}")]
    NotImplemented {
        /// Name of the unimplemented feature
        feature: &'static str,
    },

    /// Unknown leading flag byte in a serialized object
    #[error("Invalid format for {context}: unknown flag 0x{flag:02x}")]
    InvalidFormat {
        /// What was being decoded
        context: &'static str,
        /// The offending flag byte
        flag: u8,
    },

    /// Coordinates that do not satisfy the curve equation
    #[error("Point is not on the curve: {context}")]
    PointNotOnCurve {
        /// Where the point came from
        context: &'static str,
    },

    /// Domain parameters that do not describe a usable curve
    #[error("Invalid parameters for curve {curve}: {reason}")]
    InvalidCurveParameters {
        /// Curve name
        curve: String,
        /// What is wrong with it
        reason: Cow<'static, str>,
    },

    /// No built-in curve carries the requested name
    #[error("Unsupported curve: {name}")]
    UnsupportedCurve {
        /// Requested name
        name: String,
    },

    /// Element without a multiplicative inverse
    #[error("Value is not invertible in {context}")]
    NotInvertible {
        /// Operation that needed the inverse
        context: &'static str,
    },

    /// Division by a zero integer
    #[error("Division by zero")]
    DivisionByZero,
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

    /// Shorthand to create a Parse error
    pub fn parse<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Parse {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parse { context, reason } => CoreError::Parse {
                context,
                message: reason.into_owned(),
            },
            Error::Parameter { name, reason } => CoreError::InvalidArgument {
                context: "parameter validation",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::Parse {
                context,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::NotImplemented { feature } => CoreError::NotImplemented { feature },
            Error::InvalidFormat { context, flag } => CoreError::InvalidFormat {
                context,
                message: format!("unknown flag 0x{:02x}", flag),
            },
            Error::PointNotOnCurve { context } => CoreError::PointNotOnCurve { context },
            Error::InvalidCurveParameters { curve, reason } => {
                CoreError::InvalidCurveParameters {
                    curve,
                    message: reason.into_owned(),
                }
            }
            Error::UnsupportedCurve { name } => CoreError::UnsupportedCurve { name },
            Error::NotInvertible { context } => CoreError::NotInvertible { context },
            Error::DivisionByZero => CoreError::Other {
                context: "integer division",
                message: "division by zero".to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
