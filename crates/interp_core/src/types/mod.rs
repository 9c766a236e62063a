//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation, range and remap operations
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] and [`ErrorKind`] are re-exported
//! at this module level.

pub mod error;

pub use error::{ErrorKind, InterpolationError};
