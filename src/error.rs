//! Unified error types for Robokit

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Robokit
#[derive(Error, Debug)]
pub enum Error {
    /// Caller passed an unusable resource handle to a registry
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Releasing an external resource (closing a connection, quitting a driver) failed
    #[error("Resource release failed: {0}")]
    ReleaseFailure(String),

    /// A required locator could not be resolved before the poll deadline
    #[error("Locator timeout: {0}")]
    LocatorTimeout(String),

    /// Unknown or malformed locator-type prefix
    #[error("Unsupported locator type: {0}")]
    UnsupportedLocator(String),

    /// Driver-level document lookup or script evaluation failed
    #[error("Document error: {0}")]
    Document(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a new release failure error
    pub fn release_failure<S: Into<String>>(msg: S) -> Self {
        Error::ReleaseFailure(msg.into())
    }

    /// Create a new locator timeout error
    pub fn locator_timeout<S: Into<String>>(msg: S) -> Self {
        Error::LocatorTimeout(msg.into())
    }

    /// Create a new unsupported locator error
    pub fn unsupported_locator<S: Into<String>>(msg: S) -> Self {
        Error::UnsupportedLocator(msg.into())
    }

    /// Create a new document error
    pub fn document<S: Into<String>>(msg: S) -> Self {
        Error::Document(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
