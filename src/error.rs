//! Crate-level error type for tick orchestration and report transport.

use crate::pricing::PricingError;
use std::fmt;

/// Errors produced while driving ticks through the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A pricing or solver precondition failed.
    Pricing(PricingError),

    /// The feed produced a tick with no quotes.
    EmptyChain,

    /// A replay or finite feed has no more ticks.
    FeedExhausted,

    /// The feed failed to produce a tick.
    FeedError {
        /// Description of the feed failure.
        message: String,
    },

    /// Engine or streamer configuration is invalid.
    InvalidConfig {
        /// Description of the invalid setting.
        message: String,
    },

    /// Error while serializing data.
    SerializationError {
        /// Underlying serializer message.
        message: String,
    },

    /// Error while deserializing data.
    DeserializationError {
        /// Underlying deserializer message.
        message: String,
    },

    /// Report checksum does not match its payload.
    ChecksumMismatch {
        /// Checksum stored in the package.
        expected: String,
        /// Checksum computed from the payload.
        actual: String,
    },

    /// Operation not supported in the current state.
    InvalidOperation {
        /// Description of the problem.
        message: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Pricing(err) => write!(f, "pricing error: {err}"),
            EngineError::EmptyChain => write!(f, "tick contains no quotes"),
            EngineError::FeedExhausted => write!(f, "feed has no more ticks"),
            EngineError::FeedError { message } => write!(f, "feed error: {message}"),
            EngineError::InvalidConfig { message } => {
                write!(f, "invalid engine configuration: {message}")
            }
            EngineError::SerializationError { message } => {
                write!(f, "serialization error: {message}")
            }
            EngineError::DeserializationError { message } => {
                write!(f, "deserialization error: {message}")
            }
            EngineError::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected {expected}, got {actual}")
            }
            EngineError::InvalidOperation { message } => {
                write!(f, "invalid operation: {message}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Pricing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PricingError> for EngineError {
    fn from(err: PricingError) -> Self {
        EngineError::Pricing(err)
    }
}
