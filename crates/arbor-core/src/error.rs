// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for arbor operations

use crate::value::Kind;
use thiserror::Error;

/// Errors returned when an operation rejects its arguments
///
/// "Nothing matched" is never an error: lookups return `None` or an empty
/// list for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArborError {
    /// The key name to search for was empty
    #[error("key name must not be empty")]
    EmptyKeyName,
    /// The replacement key name was empty
    #[error("replacement key name must not be empty")]
    EmptyNewKeyName,
    /// A property could not be reduced to a single key name
    #[error("property must be a key name or a single-entry composite, got {kind}")]
    InvalidProperty {
        /// Kind of the rejected property
        kind: Kind,
    },
}

/// Result type for arbor operations
pub type Result<T> = std::result::Result<T, ArborError>;

/// Check that a key name is usable for key matching.
///
/// # Errors
///
/// Returns [`ArborError::EmptyKeyName`] for the empty string.
pub const fn validate_key_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        Err(ArborError::EmptyKeyName)
    } else {
        Ok(name)
    }
}
