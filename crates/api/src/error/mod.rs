//! Error handling for the ecctool ecosystem

use thiserror::Error as ThisError;


/// Primary error type for ecctool operations
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed textual or binary input
    #[error("parse error in {context}: {message}")]
    Parse {
        context: &'static str,
        message: String,
    },

    /// An argument outside the accepted domain
    #[error("invalid argument for {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// A serialized object with an unexpected shape
    #[error("invalid format in {context}: {message}")]
    InvalidFormat {
        context: &'static str,
        message: String,
    },

    /// Recognized but unsupported feature
    #[error("{feature} is not implemented")]
    NotImplemented { feature: &'static str },

    /// Domain parameters that do not describe a usable curve
    #[error("invalid parameters for curve {curve}: {message}")]
    InvalidCurveParameters { curve: String, message: String },

    /// Coordinates that do not satisfy the curve equation
    #[error("point is not on the curve: {context}")]
    PointNotOnCurve { context: &'static str },

    /// Element with no multiplicative inverse
    #[error("value is not invertible: {context}")]
    NotInvertible { context: &'static str },

    /// Random integer generation could not satisfy its bound
    #[error("random generation error in {context}: {message}")]
    RandomRange {
        context: &'static str,
        message: String,
    },

    /// No built-in curve carries the requested name
    #[error("unsupported curve: {name}")]
    UnsupportedCurve { name: String },

    /// Operation needs a private key that is not loaded
    #[error("{operation} requires a private key")]
    NoPrivateKey { operation: &'static str },

    /// Operation needs a public key that is not loaded
    #[error("{operation} requires a public key")]
    NoPublicKey { operation: &'static str },

    /// Anything else
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for ecctool operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse { context, message },
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::InvalidFormat { message, .. } => Self::InvalidFormat { context, message },
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::NotInvertible { .. } => Self::NotInvertible { context },
            Self::RandomRange { message, .. } => Self::RandomRange { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
            other => other,
        }
    }
}

/// Extension trait for Result types
pub trait ResultExt<T> {
    /// Convert the error and attach a context to it
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
