//! Error types for restutils.
//!
//! Cache operations are total and never fail; these errors cover the
//! fallible edges: loading configuration and validating hosts.

use thiserror::Error;

/// Result type alias using `RestUtilsError`.
pub type Result<T> = std::result::Result<T, RestUtilsError>;

/// Main error type for restutils operations.
#[derive(Debug, Error)]
pub enum RestUtilsError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Environment variable could not be parsed.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnvVar {
        /// Variable name
        var: String,
        /// Raw value as read
        value: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Host is neither a valid domain name nor a valid IPv4 address.
    #[error("Invalid host: {0}")]
    InvalidHost(String),
}

impl RestUtilsError {
    /// Returns true if this error comes from configuration loading.
    pub fn is_config_error(&self) -> bool {
        matches!(self, RestUtilsError::InvalidEnvVar { .. })
    }

    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, RestUtilsError::InvalidHost(_))
    }
}
