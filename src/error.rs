//! Error types for the ant colony engine.
//!
//! Every fallible operation returns [`AcoResult`]. Validation happens
//! before any engine state is touched, so a rejected call leaves the
//! engine exactly as it was.

use thiserror::Error;

/// Result type alias for wilaya-aco operations.
pub type AcoResult<T> = Result<T, AcoError>;

/// Unified error type for matrix construction, configuration, and
/// generation steps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// Malformed input: a bad matrix shape, an out-of-range parameter,
    /// or invalid start/end indices.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what was rejected.
        message: String,
    },

    /// Two distinct cities are at zero distance and no distance floor
    /// is configured, so the inverse-distance heuristic is undefined.
    #[error("degenerate distance: cities {from} and {to} coincide")]
    DegenerateDistance {
        /// First city index.
        from: usize,
        /// Second city index.
        to: usize,
    },
}

impl AcoError {
    /// Shorthand for [`AcoError::InvalidInput`].
    pub fn invalid(message: impl Into<String>) -> Self {
        AcoError::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns `true` for [`AcoError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AcoError::InvalidInput { .. })
    }
}
