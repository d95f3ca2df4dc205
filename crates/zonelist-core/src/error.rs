//! Error types for zone listing
//!
//! Two failure kinds matter to callers: configuration (including ambient
//! credential resolution) and zone retrieval. Every variant except
//! [`Error::Config`] is a retrieval failure.

use thiserror::Error;

/// Result type alias for zonelist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for zone listing
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration or credential resolution errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider API call failed
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// The provider answered with something we cannot use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Fetching the detail of a single zone failed
    #[error("Zone {id}: {source}")]
    Zone {
        /// Hosted zone identifier
        id: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Attach the failing zone id to an error
    pub fn for_zone(id: impl Into<String>, source: Error) -> Self {
        Self::Zone {
            id: id.into(),
            source: Box::new(source),
        }
    }
}
