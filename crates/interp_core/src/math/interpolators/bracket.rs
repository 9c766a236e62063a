//! Bracket search and input validation shared by every kernel.

use crate::traits::Samples;
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::debug;

/// Scalar constant in the caller's float type.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Check that `xs` and `ys` pair up and hold at least two samples.
///
/// Returns the sample count.
pub(crate) fn validate_samples<T, X, Y>(xs: &X, ys: &Y) -> Result<usize, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    if xs.len() != ys.len() {
        debug!(xs = xs.len(), ys = ys.len(), "sample length mismatch");
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    validate_len::<T, X>(xs)
}

fn validate_len<T, X>(xs: &X) -> Result<usize, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
{
    let n = xs.len();
    if n < 2 {
        debug!(got = n, "too few samples to form a bracket");
        return Err(InterpolationError::InsufficientData { got: n, need: 2 });
    }
    Ok(n)
}

#[inline]
pub(crate) fn validate_query<T: Float>(x: T) -> Result<(), InterpolationError> {
    if x.is_finite() {
        Ok(())
    } else {
        debug!(x = to_f64(x), "non-finite query");
        Err(InterpolationError::NonFiniteQuery { x: to_f64(x) })
    }
}

/// Width of the interval `[x[index], x[index + 1]]`, rejecting empty or
/// reversed intervals.
pub(crate) fn interval_width<T, X>(xs: &X, index: usize) -> Result<T, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
{
    let lower = xs.at(index);
    let upper = xs.at(index + 1);
    let width = upper - lower;

    // `!(width > 0)` also catches NaN samples
    if !(width > T::zero()) {
        debug!(
            index,
            lower = to_f64(lower),
            upper = to_f64(upper),
            "degenerate interval"
        );
        return Err(InterpolationError::DegenerateInterval {
            index,
            lower: to_f64(lower),
            upper: to_f64(upper),
        });
    }
    Ok(width)
}

/// Secant slope of segment `index`. The interval must already be validated.
#[inline]
pub(crate) fn secant_slope<T, X, Y>(xs: &X, ys: &Y, index: usize) -> T
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    (ys.at(index + 1) - ys.at(index)) / (xs.at(index + 1) - xs.at(index))
}

/// Locate the bracket `(i, i + 1)` enclosing `x`.
///
/// Finds `i` with `x[i] <= x < x[i + 1]`. Queries below the first sample use
/// `(0, 1)`; queries at or above the last sample use `(n - 2, n - 1)`.
/// Explicit sample sequences are scanned linearly; a [`UniformAxis`] answers
/// in constant time with `floor((x - min) / step)`.
///
/// [`UniformAxis`]: crate::traits::UniformAxis
///
/// # Returns
///
/// * `Ok((i, i + 1))` - The bracketing sample indices
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
/// * `Err(InterpolationError::NonFiniteQuery)` - `x` is NaN or infinite
/// * `Err(InterpolationError::DegenerateInterval)` - `x[i + 1] <= x[i]`
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::locate_bracket;
///
/// let xs = [0.0, 1.0, 2.0, 4.0];
/// assert_eq!(locate_bracket(&xs, 3.0).unwrap(), (2, 3));
/// assert_eq!(locate_bracket(&xs, -1.0).unwrap(), (0, 1));
/// assert_eq!(locate_bracket(&xs, 9.0).unwrap(), (2, 3));
/// ```
pub fn locate_bracket<T, X>(xs: &X, x: T) -> Result<(usize, usize), InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
{
    validate_len::<T, X>(xs)?;
    validate_query(x)?;

    let i = xs.locate(x);
    interval_width(xs, i)?;
    Ok((i, i + 1))
}

/// A validated bracket together with the evaluation point's position in it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<T> {
    /// Lower sample index
    pub index: usize,
    pub y0: T,
    pub y1: T,
    /// Interval width `x1 - x0`
    pub width: T,
    /// Normalised position `(x - x[index]) / width`; outside `[0, 1]` when extrapolating
    pub t: T,
}

impl<T: Float> Segment<T> {
    /// Offset of the evaluation point from the segment start.
    #[inline]
    pub fn dx(&self) -> T {
        self.t * self.width
    }
}

/// Validate inputs, apply the trim policy and locate the segment for `x`.
///
/// With `trim` the query is clamped to `[x[0], x[n-1]]`, so the result equals
/// the boundary sample's value; otherwise the boundary segment is evaluated at
/// the raw point and extrapolates.
pub(crate) fn segment<T, X, Y>(
    xs: &X,
    ys: &Y,
    x: T,
    trim: bool,
) -> Result<Segment<T>, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    validate_samples(xs, ys)?;
    validate_query(x)?;

    let x = if trim {
        x.max(xs.first()).min(xs.last())
    } else {
        x
    };

    let index = xs.locate(x);
    let width = interval_width(xs, index)?;
    let x0 = xs.at(index);

    Ok(Segment {
        index,
        y0: ys.at(index),
        y1: ys.at(index + 1),
        width,
        t: (x - x0) / width,
    })
}
