//! Constrained cubic spline (Kruger).
//!
//! A piecewise cubic that trades some smoothness for shape preservation.
//! First derivatives at the samples are estimated from the neighbouring
//! secant slopes so that the curve cannot swing past its samples:
//!
//! - interior samples take the harmonic mean of the two adjacent slopes, or
//!   zero when the slopes disagree in sign (a local extremum) or either is flat;
//! - end samples take `3/2 * s - f'(neighbour) / 2`, where `s` is the
//!   boundary segment's slope.
//!
//! The harmonic mean never exceeds twice the smaller adjacent slope, and the
//! end formula stays within `[s/2, 3s/2]`, so every segment lies inside the
//! Fritsch–Carlson monotone region: the spline creates no new extrema between
//! monotonically related samples.
//!
//! Each segment's cubic is then fixed by the second derivatives that these
//! first derivatives imply at its two ends.

use super::bracket::{interval_width, lit, secant_slope, segment, Segment};
use crate::traits::{Samples, UniformAxis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Constrained first derivative estimate at sample `index`.
pub(crate) fn first_derivative<T, X, Y>(xs: &X, ys: &Y, index: usize) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let n = xs.len();
    if n == 2 {
        return secant_slope(xs, ys, 0);
    }

    let half = lit::<T>(0.5);
    let three_halves = lit::<T>(1.5);

    if index == 0 {
        three_halves * secant_slope(xs, ys, 0) - half * interior_derivative(xs, ys, 1)
    } else if index == n - 1 {
        three_halves * secant_slope(xs, ys, n - 2) - half * interior_derivative(xs, ys, n - 2)
    } else {
        interior_derivative(xs, ys, index)
    }
}

fn interior_derivative<T, X, Y>(xs: &X, ys: &Y, index: usize) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let left = secant_slope(xs, ys, index - 1);
    let right = secant_slope(xs, ys, index);

    if left * right <= T::zero() {
        return T::zero();
    }
    lit::<T>(2.0) / (left.recip() + right.recip())
}

/// Second derivative at the left end `x[index - 1]` of segment `[x[index - 1], x[index]]`.
///
/// ```text
/// f''(x[i-1]) = -2 (f'(x[i]) + 2 f'(x[i-1])) / h + 6 Δy / h²
/// ```
pub(crate) fn left_second_derivative<T, X, Y>(xs: &X, ys: &Y, index: usize) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let h = xs.at(index) - xs.at(index - 1);
    let dy = ys.at(index) - ys.at(index - 1);
    let d_right = first_derivative(xs, ys, index);
    let d_left = first_derivative(xs, ys, index - 1);

    -lit::<T>(2.0) * (d_right + lit::<T>(2.0) * d_left) / h + lit::<T>(6.0) * dy / (h * h)
}

/// Second derivative at the right end `x[index]` of segment `[x[index - 1], x[index]]`.
///
/// ```text
/// f''(x[i]) = 2 (2 f'(x[i]) + f'(x[i-1])) / h - 6 Δy / h²
/// ```
pub(crate) fn right_second_derivative<T, X, Y>(xs: &X, ys: &Y, index: usize) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let h = xs.at(index) - xs.at(index - 1);
    let dy = ys.at(index) - ys.at(index - 1);
    let d_right = first_derivative(xs, ys, index);
    let d_left = first_derivative(xs, ys, index - 1);

    lit::<T>(2.0) * (lit::<T>(2.0) * d_right + d_left) / h - lit::<T>(6.0) * dy / (h * h)
}

/// Evaluate the segment cubic `y0 + b·dx + c·dx² + d·dx³`.
fn evaluate_segment<T, X, Y>(xs: &X, ys: &Y, seg: &Segment<T>) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    if seg.t == T::one() {
        return seg.y1;
    }

    let h = seg.width;
    let upper = seg.index + 1;
    let dd_left = left_second_derivative(xs, ys, upper);
    let dd_right = right_second_derivative(xs, ys, upper);

    let c = dd_left / lit::<T>(2.0);
    let d = (dd_right - dd_left) / (lit::<T>(6.0) * h);
    let b = (seg.y1 - seg.y0) / h - c * h - d * h * h;

    let dx = seg.dx();
    seg.y0 + dx * (b + dx * (c + dx * d))
}

/// Constrained cubic spline interpolation over explicit x and y samples.
///
/// Passes through every sample like [`catmull_spline`], but clamps the
/// tangent estimates so that no overshoot appears between samples; flat
/// runs stay flat and monotone data yields a monotone curve.
///
/// [`catmull_spline`]: super::catmull_spline
///
/// # Returns
///
/// * `Ok(y)` - The interpolated value
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
/// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(InterpolationError::NonFiniteQuery)` - `x` is NaN or infinite
/// * `Err(InterpolationError::DegenerateInterval)` - A non-increasing interval
///   at the bracket or at a neighbour used for the derivative estimates
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::constrained_spline;
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 0.0, 1.0, 1.0];
///
/// // no undershoot on the flat run
/// assert_eq!(constrained_spline(&xs, &ys, 0.5, true).unwrap(), 0.0);
/// let y = constrained_spline(&xs, &ys, 1.5, true).unwrap();
/// assert!((y - 0.5).abs() < 1e-12);
/// ```
pub fn constrained_spline<T, X, Y>(
    xs: &X,
    ys: &Y,
    x: T,
    trim: bool,
) -> Result<T, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let seg = segment(xs, ys, x, trim)?;
    let i = seg.index;
    let n = xs.len();

    // derivative estimates read one interval past each end of the segment,
    // or the two innermost intervals when the segment touches a boundary
    let first = i.saturating_sub(1);
    let last = (i + 1).min(n - 2);
    for j in (first..=last).filter(|&j| j != i) {
        interval_width(xs, j)?;
    }

    Ok(evaluate_segment(xs, ys, &seg))
}

/// Constrained cubic spline over `ys` sampled on a uniform axis from `min_x` to `max_x`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::constrained_spline_uniform;
///
/// let ys = [1.0, 1.0, 3.0];
/// assert_eq!(constrained_spline_uniform(0.0, 1.0, &ys, 0.25, true).unwrap(), 1.0);
/// ```
pub fn constrained_spline_uniform<T, Y>(
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
    constrained_spline(&axis, ys, x, trim)
}
