//! Error types for team rolling operations
//!
//! Core operations (filtering, selection, shuffling, export formatting) never
//! fail. Errors only arise while validating configuration and at the I/O
//! boundary: parsing user input, writing output, or talking to the clipboard.

use std::fmt;

/// Main error type for all fallible operations
#[derive(Debug)]
pub enum RollError {
    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A character identifier given by the user is not in the catalog
    UnknownCharacter {
        /// The identifier as typed
        id: String,
    },

    /// Text could not be parsed as a facet value
    UnknownFacetValue {
        /// The value as typed
        value: String,
    },

    /// An interactive command could not be parsed
    UnknownCommand {
        /// The offending input line
        input: String,
    },

    /// The clipboard could not be opened or written
    Clipboard {
        /// Description reported by the clipboard backend
        reason: String,
    },

    /// Reading input or writing output failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownCharacter { id } => {
                write!(f, "Unknown character '{id}'")
            }
            Self::UnknownFacetValue { value } => {
                write!(
                    f,
                    "Unknown filter value '{value}' (expected an element, gender, weapon or rarity)"
                )
            }
            Self::UnknownCommand { input } => {
                write!(f, "Unknown command '{input}' (try 'help')")
            }
            Self::Clipboard { reason } => {
                write!(f, "Clipboard error: {reason}")
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for RollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for team rolling results
pub type Result<T> = std::result::Result<T, RollError>;

impl From<std::io::Error> for RollError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the failing operation name to I/O results
pub trait WithOperation<T> {
    /// Tag an I/O failure with the operation that produced it
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as [`RollError::Io`]
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| RollError::Io { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RollError {
    RollError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a clipboard error from any backend error
pub fn clipboard_error(reason: &impl ToString) -> RollError {
    RollError::Clipboard {
        reason: reason.to_string(),
    }
}
