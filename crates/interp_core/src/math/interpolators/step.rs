//! Step (sample-and-hold) interpolation.

use super::bracket::{interval_width, validate_query, validate_samples};
use crate::traits::{Samples, UniformAxis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Step interpolation over explicit x and y samples.
///
/// Finds the bracket `(i, i + 1)` around `x`, computes the fractional
/// position `t = (x - x[i]) / (x[i+1] - x[i])` and returns `y[i]` while
/// `t < threshold`, `y[i + 1]` otherwise.
///
/// A `threshold` of `1` holds the previous value until the next sample is
/// reached (floor step); `0.5` switches at the interval midpoint (nearest
/// neighbour); `0` switches immediately (ceiling step). Queries below the
/// first sample return `y[0]`, queries at or above the last sample return
/// `y[n - 1]`.
///
/// # Returns
///
/// * `Ok(y)` - The selected sample value
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
/// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(InterpolationError::NonFiniteQuery)` - `x` is NaN or infinite
/// * `Err(InterpolationError::InvalidInput)` - `threshold` is NaN
/// * `Err(InterpolationError::DegenerateInterval)` - `x[i + 1] <= x[i]` at the bracket,
///   including the boundary bracket of an out-of-domain query
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::step;
///
/// let xs = [0.0, 1.0, 2.0];
/// let ys = [10.0, 20.0, 30.0];
///
/// assert_eq!(step(&xs, &ys, 1.9, 1.0).unwrap(), 20.0);
/// assert_eq!(step(&xs, &ys, 1.5, 0.5).unwrap(), 30.0);
/// ```
pub fn step<T, X, Y>(xs: &X, ys: &Y, x: T, threshold: T) -> Result<T, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let n = validate_samples(xs, ys)?;
    validate_query(x)?;
    if threshold.is_nan() {
        return Err(InterpolationError::InvalidInput(
            "step threshold must not be NaN".to_string(),
        ));
    }

    // the bracket is validated even when the query lies outside the domain
    let i = xs.locate(x);
    let width = interval_width(xs, i)?;

    if x < xs.first() {
        return Ok(ys.first());
    }
    if x >= xs.last() {
        return Ok(ys.at(n - 1));
    }

    let t = (x - xs.at(i)) / width;

    Ok(if t < threshold { ys.at(i) } else { ys.at(i + 1) })
}

/// Step interpolation over `ys` sampled on a uniform axis from `min_x` to `max_x`.
///
/// Equivalent to [`step`] with `xs = UniformAxis::new(min_x, max_x, ys.len())`;
/// the bracket index is computed directly as `floor((x - min_x) / step)`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::step_uniform;
///
/// let ys = [0.0, 1.0];
/// assert_eq!(step_uniform(0.0, 10.0, &ys, 4.0, 0.5).unwrap(), 0.0);
/// assert_eq!(step_uniform(0.0, 10.0, &ys, 6.0, 0.5).unwrap(), 1.0);
/// ```
pub fn step_uniform<T, Y>(
    min_x: T,
    max_x: T,
    ys: &Y,
    x: T,
    threshold: T,
) -> Result<T, InterpolationError>
where
    T: Float,
    Y: Samples<T> + ?Sized,
{
    let axis = UniformAxis::new(min_x, max_x, ys.len())?;
    step(&axis, ys, x, threshold)
}

/// Step interpolation over `ys` on the implicit axis `1, 2, ..., n`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::step_indexed;
///
/// let ys = [5.0, 6.0, 7.0];
/// assert_eq!(step_indexed(&ys, 2.5, 1.0).unwrap(), 6.0);
/// assert_eq!(step_indexed(&ys, 3.0, 1.0).unwrap(), 7.0);
/// ```
pub fn step_indexed<T, Y>(ys: &Y, x: T, threshold: T) -> Result<T, InterpolationError>
where
    T: Float,
    Y: Samples<T> + ?Sized,
{
    let axis = UniformAxis::indexed(ys.len())?;
    step(&axis, ys, x, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_default_threshold_holds_previous_value() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 10.0, 20.0, 30.0];

        assert_eq!(step(&xs, &ys, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(step(&xs, &ys, 0.99, 1.0).unwrap(), 0.0);
        assert_eq!(step(&xs, &ys, 1.0, 1.0).unwrap(), 10.0);
        assert_eq!(step(&xs, &ys, 2.5, 1.0).unwrap(), 20.0);
    }

    #[test]
    fn test_step_at_samples_returns_sample() {
        let xs = [0.0, 0.5, 2.0, 7.0];
        let ys = [3.0, -1.0, 4.0, 1.0];
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(step(&xs, &ys, *x, 1.0).unwrap(), *y);
        }
    }

    #[test]
    fn test_step_midpoint_threshold() {
        let xs = [0.0, 10.0];
        let ys = [0.0, 1.0];

        assert_eq!(step(&xs, &ys, 4.0, 0.5).unwrap(), 0.0);
        assert_eq!(step(&xs, &ys, 5.0, 0.5).unwrap(), 1.0);
        assert_eq!(step(&xs, &ys, 6.0, 0.5).unwrap(), 1.0);
    }

    #[test]
    fn test_step_zero_threshold_switches_immediately() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 3.0];

        // t == threshold selects the upper value
        assert_eq!(step(&xs, &ys, 0.0, 0.0).unwrap(), 2.0);
        assert_eq!(step(&xs, &ys, 0.1, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn test_step_outside_domain_returns_boundary_values() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 3.0];

        assert_eq!(step(&xs, &ys, -5.0, 0.0).unwrap(), 1.0);
        assert_eq!(step(&xs, &ys, 2.0, 1.0).unwrap(), 3.0);
        assert_eq!(step(&xs, &ys, 50.0, 1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_step_nan_threshold_rejected() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        assert!(matches!(
            step(&xs, &ys, 0.5, f64::NAN),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_step_insufficient_data() {
        let xs = [0.0];
        let ys = [1.0];
        assert_eq!(
            step(&xs, &ys, 0.0, 1.0),
            Err(InterpolationError::InsufficientData { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_step_rejects_degenerate_boundary_bracket() {
        let ys = [10.0, 20.0];

        match step(&[2.0, 1.0], &ys, 1.5, 1.0) {
            Err(InterpolationError::DegenerateInterval { index, lower, upper }) => {
                assert_eq!(index, 0);
                assert_eq!(lower, 2.0);
                assert_eq!(upper, 1.0);
            }
            other => panic!("Expected DegenerateInterval error, got {:?}", other),
        }

        for &x in &[-1.0, 0.0, 1.0] {
            assert!(matches!(
                step(&[0.0, 0.0], &ys, x, 1.0),
                Err(InterpolationError::DegenerateInterval { index: 0, .. })
            ));
        }
    }

    #[test]
    fn test_step_agrees_with_linear_on_degenerate_axis() {
        let xs = [0.0, 1.0, 1.0];
        let ys = [1.0, 2.0, 3.0];
        for &x in &[1.0, 5.0] {
            assert_eq!(
                step(&xs, &ys, x, 1.0).unwrap_err(),
                crate::math::interpolators::linear(&xs, &ys, x, true).unwrap_err()
            );
        }
    }

    #[test]
    fn test_step_uniform_matches_explicit() {
        let ys = [2.0, 4.0, 8.0, 16.0, 32.0];
        let xs = [0.0, 2.5, 5.0, 7.5, 10.0];
        for k in -4..=44 {
            let x = k as f64 * 0.25;
            assert_eq!(
                step_uniform(0.0, 10.0, &ys, x, 0.5).unwrap(),
                step(&xs, &ys, x, 0.5).unwrap(),
                "x = {}",
                x
            );
        }
    }

    #[test]
    fn test_step_uniform_degenerate_axis() {
        let ys = [0.0, 1.0];
        assert!(matches!(
            step_uniform(3.0, 3.0, &ys, 3.0, 1.0),
            Err(InterpolationError::DegenerateInterval { .. })
        ));
    }

    #[test]
    fn test_step_indexed_uses_one_based_axis() {
        let ys = [5.0, 6.0, 7.0];
        assert_eq!(step_indexed(&ys, 1.0, 1.0).unwrap(), 5.0);
        assert_eq!(step_indexed(&ys, 1.5, 0.5).unwrap(), 6.0);
        assert_eq!(step_indexed(&ys, 0.0, 1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_step_f32() {
        let xs: [f32; 2] = [0.0, 1.0];
        let ys: [f32; 2] = [1.0, 2.0];
        assert_eq!(step(&xs, &ys, 0.75_f32, 0.5).unwrap(), 2.0);
    }
}
