//! Error types for batch validation and configuration loading

use crate::utci::batch::FieldName;
use std::fmt;

/// Errors reported before any arithmetic takes place
///
/// Numeric anomalies (NaN, infinities) are never errors; they propagate to
/// the affected output elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtciError {
    /// An input field's shape differs from the shape of `t2`
    ShapeMismatch {
        /// The offending field
        field: FieldName,
        /// Shape of `t2`
        expected: Vec<usize>,
        /// Shape of the offending field
        found: Vec<usize>,
    },
    /// A field was built from a shape whose element count does not match its data
    InvalidShape {
        /// Requested shape
        shape: Vec<usize>,
        /// Number of data elements supplied
        len: usize,
    },
    /// The output buffer length does not match the input length
    OutputLength {
        /// Input element count
        expected: usize,
        /// Output buffer length
        found: usize,
    },
}

impl fmt::Display for UtciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtciError::ShapeMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "Shape mismatch: {field} has shape {found:?}, expected {expected:?} (shape of t2)"
            ),
            UtciError::InvalidShape { shape, len } => {
                write!(f, "Invalid shape {shape:?} for {len} data elements")
            }
            UtciError::OutputLength { expected, found } => {
                write!(f, "Output buffer holds {found} elements, expected {expected}")
            }
        }
    }
}

impl std::error::Error for UtciError {}

/// Errors that can occur while loading an evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the configuration file
    LoadFailed(String),
    /// Failed to parse the configuration contents
    ParseFailed(String),
    /// Configuration parsed but holds an unusable value
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
