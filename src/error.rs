//! Error types for the underbar library.

use thiserror::Error;

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, UnderbarError>;

/// Main error type for the underbar library
#[derive(Error, Debug, Clone)]
pub enum UnderbarError {
    #[error("Empty reduction: {message}")]
    EmptyReduction { message: String },

    #[error("Missing method: {message}")]
    MissingMethod { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl UnderbarError {
    pub fn empty_reduction(msg: impl Into<String>) -> Self {
        Self::EmptyReduction {
            message: msg.into(),
        }
    }

    pub fn missing_method(msg: impl Into<String>) -> Self {
        Self::MissingMethod {
            message: msg.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
        }
    }
}

impl From<serde_json::Error> for UnderbarError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
