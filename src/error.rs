//! Error types for the Stash client.
//!
//! This module contains the configuration error type. Configuration errors
//! are only raised for values passed explicitly to
//! [`StashConfigBuilder`](crate::StashConfigBuilder); values read from the
//! configuration file never fail construction and fall back to defaults
//! instead.
//!
//! # Example
//!
//! ```rust
//! use stash_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur when building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Omit the key for unauthenticated access instead.")]
    EmptyApiKey,

    /// Host cannot be empty.
    #[error("Stash host cannot be empty. Expected a host name such as 'localhost'.")]
    EmptyHost,

    /// Port is not a valid TCP port.
    #[error("Invalid port '{port}'. Expected a number between 1 and 65535.")]
    InvalidPort {
        /// The invalid port value that was provided.
        port: String,
    },

    /// Server URL is invalid.
    #[error("Invalid Stash URL '{url}'. Please provide a URL with scheme (e.g., 'http://localhost:9999').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
