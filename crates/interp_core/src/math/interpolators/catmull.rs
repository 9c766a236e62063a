//! Catmull-Rom cubic Hermite spline.

use super::bracket::{interval_width, lit, secant_slope, segment};
use crate::traits::{Samples, UniformAxis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Catmull-Rom tangent estimate at sample `index`.
///
/// Interior samples use the slope between their two neighbours,
/// `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])`; the first and last samples use
/// the one-sided slope of their adjacent segment. Intervals touched must
/// already be validated.
pub(crate) fn catmull_slope<T, X, Y>(xs: &X, ys: &Y, index: usize) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let n = xs.len();
    if index == 0 {
        return secant_slope(xs, ys, 0);
    }
    if index == n - 1 {
        return secant_slope(xs, ys, n - 2);
    }

    let span = xs.at(index + 1) - xs.at(index - 1);
    if span == T::zero() {
        return T::zero();
    }
    (ys.at(index + 1) - ys.at(index - 1)) / span
}

/// Evaluate the cubic Hermite basis on a segment of width `width`.
///
/// `m0` and `m1` are the tangents at the segment ends.
#[inline]
pub(crate) fn hermite<T: Float>(t: T, y0: T, y1: T, m0: T, m1: T, width: T) -> T {
    let two = lit::<T>(2.0);
    let three = lit::<T>(3.0);
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = two * t3 - three * t2 + T::one();
    let h10 = t3 - two * t2 + t;
    let h01 = three * t2 - two * t3;
    let h11 = t3 - t2;

    h00 * y0 + h01 * y1 + (h10 * m0 + h11 * m1) * width
}

/// Catmull-Rom spline interpolation over explicit x and y samples.
///
/// Each segment is a cubic Hermite polynomial whose end tangents come from
/// [`catmull_slope`]. The curve is C¹, passes through every sample, and may
/// overshoot between samples; use [`constrained_spline`] where that matters.
///
/// [`constrained_spline`]: super::constrained_spline
///
/// # Returns
///
/// * `Ok(y)` - The interpolated value
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
/// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(InterpolationError::NonFiniteQuery)` - `x` is NaN or infinite
/// * `Err(InterpolationError::DegenerateInterval)` - A non-increasing interval
///   at the bracket or at a neighbour used for the tangents
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::catmull_spline;
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 0.0, 1.0];
///
/// assert_eq!(catmull_spline(&xs, &ys, 1.0, true).unwrap(), 1.0);
/// let y = catmull_spline(&xs, &ys, 1.5, true).unwrap();
/// assert!((y - 0.5).abs() < 1e-12);
/// ```
pub fn catmull_spline<T, X, Y>(xs: &X, ys: &Y, x: T, trim: bool) -> Result<T, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let seg = segment(xs, ys, x, trim)?;
    let i = seg.index;
    let n = xs.len();

    // tangents reach one interval to each side of the bracket
    if i > 0 {
        interval_width(xs, i - 1)?;
    }
    if i + 2 < n {
        interval_width(xs, i + 1)?;
    }

    let m0 = catmull_slope(xs, ys, i);
    let m1 = catmull_slope(xs, ys, i + 1);

    Ok(hermite(seg.t, seg.y0, seg.y1, m0, m1, seg.width))
}

/// Catmull-Rom spline over `ys` sampled on a uniform axis from `min_x` to `max_x`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::catmull_spline_uniform;
///
/// let ys = [0.0, 1.0, 4.0, 9.0];
/// let y = catmull_spline_uniform(0.0, 3.0, &ys, 2.0, true).unwrap();
/// assert_eq!(y, 4.0);
/// ```
pub fn catmull_spline_uniform<T, Y>(
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
    catmull_spline(&axis, ys, x, trim)
}
