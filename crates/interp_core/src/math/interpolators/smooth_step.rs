//! Smoothstep (ease-in/ease-out) interpolation.

use super::bracket::{lit, segment};
use crate::traits::{Samples, UniformAxis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Smoothstep interpolation over explicit x and y samples.
///
/// The normalised bracket position `t` is eased with `s = 3t² - 2t³` before
/// blending `y[i]` and `y[i + 1]`, giving a C¹ curve with zero slope at
/// every sample.
///
/// Without `trim`, queries outside the domain evaluate the boundary
/// segment's polynomial at the raw `t`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::smooth_step;
///
/// let xs = [0.0, 10.0];
/// let ys = [0.0, 10.0];
///
/// assert_eq!(smooth_step(&xs, &ys, 5.0, true).unwrap(), 5.0);
/// assert!(smooth_step(&xs, &ys, 2.5, true).unwrap() < 2.5);
/// ```
pub fn smooth_step<T, X, Y>(xs: &X, ys: &Y, x: T, trim: bool) -> Result<T, InterpolationError>
where
    T: Float,
    X: Samples<T> + ?Sized,
    Y: Samples<T> + ?Sized,
{
    let seg = segment(xs, ys, x, trim)?;
    let t = seg.t;
    let s = t * t * (lit::<T>(3.0) - lit::<T>(2.0) * t);
    Ok(seg.y0 * (T::one() - s) + seg.y1 * s)
}

/// Smoothstep interpolation over `ys` sampled on a uniform axis from `min_x` to `max_x`.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::smooth_step_uniform;
///
/// let ys = [0.0, 1.0, 0.0];
/// assert_eq!(smooth_step_uniform(-1.0, 1.0, &ys, 0.0, true).unwrap(), 1.0);
/// ```
pub fn smooth_step_uniform<T, Y>(
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
    smooth_step(&axis, ys, x, trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_samples() {
        let xs = [0.0, 1.0, 3.0, 4.0];
        let ys = [2.0, -1.0, 0.3, 5.0];
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(smooth_step(&xs, &ys, *x, true).unwrap(), *y);
        }
    }

    #[test]
    fn test_midpoint_symmetry() {
        let xs = [0.0, 10.0];
        let ys = [0.0, 10.0];
        assert_eq!(smooth_step(&xs, &ys, 5.0, true).unwrap(), 5.0);

        let a = smooth_step(&xs, &ys, 2.0, true).unwrap();
        let b = smooth_step(&xs, &ys, 8.0, true).unwrap();
        assert!((a + b - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // t = 0.25 -> s = 3/16 - 2/64 = 0.15625
        let xs = [0.0, 4.0];
        let ys = [0.0, 1.0];
        assert!((smooth_step(&xs, &ys, 1.0, true).unwrap() - 0.15625).abs() < 1e-12);
    }

    #[test]
    fn test_zero_slope_at_samples() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [0.0, 10.0, 0.0];
        let h = 1e-6;

        for &knot in &[0.0, 10.0] {
            let y0 = smooth_step(&xs, &ys, knot, true).unwrap();
            let y1 = smooth_step(&xs, &ys, knot + h, true).unwrap();
            assert!(((y1 - y0) / h).abs() < 1e-4, "slope at {}", knot);
        }
        let y0 = smooth_step(&xs, &ys, 20.0 - h, true).unwrap();
        let y1 = smooth_step(&xs, &ys, 20.0, true).unwrap();
        assert!(((y1 - y0) / h).abs() < 1e-4);
    }

    #[test]
    fn test_trim_and_extrapolation() {
        let xs = [0.0, 10.0];
        let ys = [0.0, 10.0];

        assert_eq!(smooth_step(&xs, &ys, -5.0, true).unwrap(), 0.0);
        assert_eq!(smooth_step(&xs, &ys, 15.0, true).unwrap(), 10.0);

        // t = -0.5 -> s = 0.75 + 0.25 = 1.0
        assert!((smooth_step(&xs, &ys, -5.0, false).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_variant() {
        let ys = [0.0, 1.0, 0.0];
        let explicit = [-1.0, 0.0, 1.0];
        for k in -10..=10 {
            let x = k as f64 * 0.1;
            assert_eq!(
                smooth_step_uniform(-1.0, 1.0, &ys, x, true).unwrap(),
                smooth_step(&explicit, &ys, x, true).unwrap()
            );
        }
    }

    #[test]
    fn test_degenerate_interval() {
        let xs = [0.0, 0.0];
        let ys = [1.0, 2.0];
        assert!(matches!(
            smooth_step(&xs, &ys, 0.0, true),
            Err(InterpolationError::DegenerateInterval { .. })
        ));
    }
}
