//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation, range generation and remapping
//! - `ErrorKind`: Coarse classification of an `InterpolationError`

use thiserror::Error;

/// Coarse failure category of an [`InterpolationError`].
///
/// # Variants
/// - `InvalidArgument`: The caller supplied unusable arguments
///   (too few samples, mismatched lengths, non-finite query, bad parameter)
/// - `DegenerateInterval`: The bracketing interval has zero or negative width
///
/// # Examples
/// ```
/// use interp_core::types::{ErrorKind, InterpolationError};
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Invalid arguments supplied by the caller.
    InvalidArgument,
    /// Zero-width or decreasing interval at the computed bracket.
    DegenerateInterval,
}

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InsufficientData`: Not enough sample points
/// - `LengthMismatch`: x and y sequences differ in length
/// - `NonFiniteQuery`: Query point is NaN or infinite
/// - `InvalidInput`: General invalid parameter
/// - `DegenerateInterval`: Duplicate or non-increasing x-values
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::DegenerateInterval { index: 2, lower: 1.0, upper: 1.0 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// x and y sample sequences have different lengths.
    #[error("Sample length mismatch: xs has {xs} values, ys has {ys}")]
    LengthMismatch {
        /// Length of the x sequence
        xs: usize,
        /// Length of the y sequence
        ys: usize,
    },

    /// Query point is NaN or infinite.
    #[error("Query point {x} is not finite")]
    NonFiniteQuery {
        /// The rejected query point
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Interval `[lower, upper]` starting at `index` is empty or reversed.
    #[error("Degenerate interval at index {index}: [{lower}, {upper}]")]
    DegenerateInterval {
        /// Index of the interval's lower sample
        index: usize,
        /// x-value of the lower sample
        lower: f64,
        /// x-value of the upper sample
        upper: f64,
    },
}

impl InterpolationError {
    /// Classify the error into its [`ErrorKind`].
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::types::{ErrorKind, InterpolationError};
    ///
    /// let err = InterpolationError::DegenerateInterval { index: 0, lower: 1.0, upper: 1.0 };
    /// assert_eq!(err.kind(), ErrorKind::DegenerateInterval);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpolationError::InsufficientData { .. }
            | InterpolationError::LengthMismatch { .. }
            | InterpolationError::NonFiniteQuery { .. }
            | InterpolationError::InvalidInput(_) => ErrorKind::InvalidArgument,
            InterpolationError::DegenerateInterval { .. } => ErrorKind::DegenerateInterval,
        }
    }
}
