//! Linear interpolation implementation.

use super::bracket::segment;
use crate::traits::{Samples, UniformAxis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolation over explicit x and y samples.
///
/// # Formula
///
/// ```text
/// t = (x - x[i]) / (x[i+1] - x[i])
/// y = y[i] * (1 - t) + y[i+1] * t
/// ```
///
/// The blend form returns the sample values exactly at both ends of a
/// segment.
///
/// # Arguments
///
/// * `xs` - Increasing x-coordinates
/// * `ys` - Corresponding y-values
/// * `x` - The point at which to interpolate
/// * `trim` - Clamp out-of-domain queries to the boundary values (`true`)
///   or extrapolate along the boundary segment (`false`)
///
/// # Returns
///
/// * `Ok(y)` - The interpolated value
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
/// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(InterpolationError::NonFiniteQuery)` - `x` is NaN or infinite
/// * `Err(InterpolationError::DegenerateInterval)` - `x[i + 1] <= x[i]` at the bracket
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear;
///
/// let xs = [0.0, 10.0];
/// let ys = [0.0, 10.0];
///
/// assert_eq!(linear(&xs, &ys, 5.0, true).unwrap(), 5.0);
/// assert_eq!(linear(&xs, &ys, -5.0, true).unwrap(), 0.0);
/// assert_eq!(linear(&xs, &ys, -5.0, false).unwrap(), -5.0);
/// ```
pub fn linear<T, X, Y>(xs: &X, ys: &Y, x: T, trim: bool) -> Result<T, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let seg = segment(xs, ys, x, trim)?;
    Ok(seg.y0 * (T::one() - seg.t) + seg.y1 * seg.t)
}

/// Linear interpolation over `ys` sampled on a uniform axis from `min_x` to `max_x`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear_uniform;
///
/// let ys = [0.0, 100.0, 0.0];
/// assert_eq!(linear_uniform(0.0, 2.0, &ys, 0.5, true).unwrap(), 50.0);
/// ```
pub fn linear_uniform<T, Y>(
    min_x: T,
    max_x: T,
    ys: &Y,
    x: T,
    trim: bool,
) -> Result<T, InterpolationError>
where
    T: Float,
    Y: Samples<T> + ?Sized,
{
    let axis = UniformAxis::new(min_x, max_x, ys.len())?;
    linear(&axis, ys, x, trim)
}

/// Linear interpolation over `ys` on the implicit axis `1, 2, ..., n`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::linear_indexed;
///
/// let ys = [10.0, 20.0, 40.0];
/// assert_eq!(linear_indexed(&ys, 2.5, true).unwrap(), 30.0);
/// ```
pub fn linear_indexed<T, Y>(ys: &Y, x: T, trim: bool) -> Result<T, InterpolationError>
where
    T: Float,
    Y: Samples<T> + ?Sized,
{
    let axis = UniformAxis::indexed(ys.len())?;
    linear(&axis, ys, x, trim)
}
