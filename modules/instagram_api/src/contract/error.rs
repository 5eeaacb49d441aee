//! Contract error types for settings storage
//!
//! These errors are transport-agnostic and returned by every settings backend.

/// Settings storage errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The settings database could not be reached
    #[error("Cannot connect to settings database: {message}")]
    Connection {
        /// Driver error message
        message: String,
    },
    /// A statement failed while provisioning, loading or saving
    #[error("Settings query failed: {message}")]
    Query {
        /// Driver error message
        message: String,
    },
    /// A value could not be converted into its column type
    #[error("Invalid value for setting '{key}': {message}")]
    Validation {
        /// Setting key
        key: String,
        /// Conversion error details
        message: String,
    },
    /// Configuration could not be loaded
    #[error("Invalid settings configuration: {message}")]
    Config {
        /// Error details
        message: String,
    },
}

impl SettingsError {
    /// Wrap a repository failure
    pub fn query(error: impl std::fmt::Display) -> Self {
        Self::Query {
            message: error.to_string(),
        }
    }
}
