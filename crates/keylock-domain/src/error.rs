//! Error handling types
//!
//! Logical lock outcomes ("not acquired", "not released") are ordinary return
//! values and never appear here.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for keylock
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to an operation
    ///
    /// Always raised before any store call.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The backing store could not be reached or did not answer in time
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the connectivity failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The backing store answered with an error reply
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The caller cancelled the operation before the store responded
    #[error("Operation cancelled: {operation}")]
    Cancelled {
        /// Name of the cancelled operation
        operation: String,
    },

    /// Payload could not be serialized or deserialized
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a cancellation error for the named operation
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }
}

// Store error creation methods
impl Error {
    /// Create a store unavailable error
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store unavailable error with source
    pub fn store_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store error reply with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Serialization error creation methods
impl Error {
    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with source
    pub fn serialization_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether the error is an argument validation failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether the error reports an unreachable store
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    /// Whether the error reports caller cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
