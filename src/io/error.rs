//! Error types for synthesis operations
//!
//! Caller-reachable failures (bad configuration, decode/encode problems)
//! surface as [`SynthesisError`] values; internal loop invariants stay
//! debug assertions and carry no runtime cost in release builds.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Failed to decode the exemplar image from the filesystem
    ImageLoad {
        /// Path to the exemplar file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Exemplar data doesn't meet synthesis requirements
    InvalidSourceData {
        /// Description of what's wrong with the exemplar
        reason: String,
    },

    /// Synthesis parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A reference cell names an offset outside the exemplar
    InvalidExemplarOffset {
        /// The out-of-range offset
        offset: i64,
        /// Number of pixels in the exemplar
        exemplar_len: usize,
    },

    /// Failed to encode the synthesised image to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load exemplar '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid exemplar data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidExemplarOffset {
                offset,
                exemplar_len,
            } => {
                write!(
                    f,
                    "Reference offset {offset} is out of bounds (exemplar holds {exemplar_len} pixels)"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<image::ImageError> for SynthesisError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SynthesisError {
    SynthesisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
