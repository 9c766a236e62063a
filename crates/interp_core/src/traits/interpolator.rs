//! The `Interpolator` trait shared by reusable curve evaluators.

use crate::types::InterpolationError;
use num_traits::Float;

/// A one-dimensional curve that can be evaluated at arbitrary points.
///
/// Implementors bind a sample set to an evaluation policy once, then answer
/// repeated queries.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Curve, CurveConfig};
/// use interp_core::traits::Interpolator;
///
/// let xs: [f64; 3] = [0.0, 1.0, 2.0];
/// let ys = [0.0, 2.0, 4.0];
/// let curve = Curve::new(&xs, &ys, CurveConfig::default()).unwrap();
///
/// assert_eq!(curve.domain(), (0.0, 2.0));
/// assert!((curve.interpolate(1.5).unwrap() - 3.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Evaluate the curve at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return `(x_min, x_max)`, the span covered by the samples.
    fn domain(&self) -> (T, T);

    /// Evaluate the curve at every point of `xs`, stopping at the first error.
    #[inline]
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }
}
