//! Evenly spaced sample axes.
//!
//! Generated ranges are typically used as the x-axis of a sample set when the
//! y-values were recorded at regular intervals. For evaluation alone,
//! [`UniformAxis`](crate::traits::UniformAxis) describes the same axis without
//! allocating.

use crate::traits::samples::index_to_float;
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::debug;

/// `n` evenly spaced values from `min` to `max`.
///
/// # Formula
///
/// ```text
/// list[m] = min + (max - min) / (n - 1) * m
/// ```
///
/// `max < min` yields a descending sequence. The last value is computed with
/// the same formula and may differ from `max` by rounding.
///
/// # Returns
///
/// * `Ok(values)` - The generated sequence
/// * `Err(InterpolationError::InsufficientData)` - `n < 2`
/// * `Err(InterpolationError::InvalidInput)` - `min` or `max` is not finite
///
/// # Example
///
/// ```
/// use interp_core::math::range::generate;
///
/// let xs = generate(0.0, 1.0, 5).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn generate<T: Float>(min: T, max: T, n: usize) -> Result<Vec<T>, InterpolationError> {
    let step = spacing(min, max, n)?;
    Ok((0..n).map(|m| min + step * index_to_float(m)).collect())
}

/// Fixed-size variant of [`generate`] producing `N` values without allocating.
///
/// # Example
///
/// ```
/// use interp_core::math::range::generate_array;
///
/// let xs: [f64; 3] = generate_array(-1.0, 1.0).unwrap();
/// assert_eq!(xs, [-1.0, 0.0, 1.0]);
/// ```
pub fn generate_array<T: Float, const N: usize>(
    min: T,
    max: T,
) -> Result<[T; N], InterpolationError> {
    let step = spacing(min, max, N)?;
    Ok(std::array::from_fn(|m| min + step * index_to_float(m)))
}

/// The sequence `1, 2, ..., n`.
///
/// This is the implicit x-axis used by the `_indexed` kernels.
///
/// # Example
///
/// ```
/// use interp_core::math::range::unit_range;
///
/// assert_eq!(unit_range::<f64>(4), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn unit_range<T: Float>(n: usize) -> Vec<T> {
    (1..=n).map(index_to_float).collect()
}

fn spacing<T: Float>(min: T, max: T, n: usize) -> Result<T, InterpolationError> {
    if n < 2 {
        debug!(got = n, "range needs at least two points");
        return Err(InterpolationError::InsufficientData { got: n, need: 2 });
    }
    if !(min.is_finite() && max.is_finite()) {
        debug!(
            min = min.to_f64().unwrap_or(f64::NAN),
            max = max.to_f64().unwrap_or(f64::NAN),
            "range bounds not finite"
        );
        return Err(InterpolationError::InvalidInput(
            "range bounds must be finite".to_string(),
        ));
    }
    Ok((max - min) / index_to_float(n - 1))
}
