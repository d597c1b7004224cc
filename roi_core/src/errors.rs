//! # Error Types
//!
//! Structured error types for roi_core. The engine functions themselves never
//! fail; errors come from the boundary layers around them (input validation,
//! preset lookup, settings parsing, JSON handling).
//!
//! ## Example
//!
//! ```rust
//! use roi_core::errors::{RoiError, RoiResult};
//!
//! fn validate_ramp(share: f64) -> RoiResult<()> {
//!     if !(0.0..=1.0).contains(&share) {
//!         return Err(RoiError::invalid_input(
//!             "year_one_ramp_share",
//!             share.to_string(),
//!             "Share must be between 0 and 1",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_ramp(1.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roi_core operations
pub type RoiResult<T> = Result<T, RoiError>;

/// Structured error type for the economics engine boundary.
///
/// Serializes with a `type` discriminator so API consumers can branch on it.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RoiError {
    /// An input value is invalid (non-finite, negative, share out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Requested preset does not exist
    #[error("Preset not found: network '{network}', scenario '{scenario}'")]
    PresetNotFound { network: String, scenario: String },

    /// Engine settings could not be parsed or read
    #[error("Settings error: {reason}")]
    Settings { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl RoiError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RoiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(network: impl Into<String>, scenario: impl Into<String>) -> Self {
        RoiError::PresetNotFound {
            network: network.into(),
            scenario: scenario.into(),
        }
    }

    /// Create a Settings error
    pub fn settings(reason: impl Into<String>) -> Self {
        RoiError::Settings { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RoiError::InvalidInput { .. } => "INVALID_INPUT",
            RoiError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
            RoiError::Settings { .. } => "SETTINGS_ERROR",
            RoiError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for RoiError {
    fn from(err: serde_json::Error) -> Self {
        RoiError::SerializationError {
            reason: err.to_string(),
        }
    }
}
