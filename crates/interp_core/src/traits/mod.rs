//! Core traits for numeric scalars and sample sources.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Read-only indexable sample sequences (`Samples` trait and its views)
//! - Curve evaluation (`Interpolator` trait)

/// Generic floating-point trait for numeric computations.
///
/// All interpolation kernels are generic over this trait so they work with
/// `f32`, `f64` and any other type implementing `num_traits::Float`.
///
/// # Examples
/// ```
/// use interp_core::traits::Float;
///
/// fn midpoint<T: Float>(a: T, b: T) -> T {
///     (a + b) / (T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(2.0_f64, 4.0), 3.0);
/// ```
pub use num_traits::Float;

pub mod interpolator;
pub mod samples;

pub use interpolator::Interpolator;
pub use samples::{Cast, Samples, Strided, UniformAxis};
